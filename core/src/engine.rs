use crate::*;

/// One game from first click to win or loss.
///
/// All mutation flows through [`click`](Self::click) and [`restart`](Self::restart); the
/// presentation reads the board, turn counter and status through accessors or a
/// [`GameSnapshot`].
#[derive(Clone, Debug)]
pub struct GameEngine<P = RandomMinePlacer> {
    config: GameConfig,
    board: Board,
    turns: TurnTracker,
    status: GameStatus,
    last_event: ClickEvent,
    placer: P,
}

impl GameEngine<RandomMinePlacer> {
    /// Starts a game with uniformly random placement derived from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_placer(config, RandomMinePlacer::new(seed))
    }
}

impl<P: MinePlacer> GameEngine<P> {
    pub fn with_placer(config: GameConfig, mut placer: P) -> Result<Self> {
        config.validate()?;

        let mut board = Board::new(config.size);
        placer.place_mines(&mut board, config.mines)?;
        log::debug!(
            "New game {:?} with {} mines, reposition every {} turns",
            config.size,
            config.mines,
            config.reposition_interval
        );

        Ok(Self {
            config,
            board,
            turns: TurnTracker::new(config.reposition_interval),
            status: GameStatus::default(),
            last_event: ClickEvent::default(),
            placer,
        })
    }

    /// Starts over with the same configuration and a fresh layout.
    pub fn restart(&mut self) -> Result<()> {
        let mut board = Board::new(self.config.size);
        self.placer.place_mines(&mut board, self.config.mines)?;

        self.board = board;
        self.turns.reset();
        self.status = GameStatus::Playing;
        self.last_event = ClickEvent::Ignored;
        log::debug!("Game restarted");
        Ok(())
    }

    /// Plays one turn at `coords`.
    ///
    /// Clicks outside the board, on revealed cells, or after the game ended are ignored
    /// and leave every piece of state untouched. Fails only when the mines are due to
    /// move and no longer fit on the hidden cells.
    pub fn click(&mut self, coords: Coord2) -> Result<ClickEvent> {
        if self.status.is_finished() {
            return Ok(ClickEvent::Ignored);
        }

        match self.board.cell(coords) {
            Some(cell) if !cell.is_revealed() => {}
            _ => return Ok(ClickEvent::Ignored),
        }

        self.turns.advance();
        let event = self.play_turn(coords)?;
        self.last_event = event;
        Ok(event)
    }

    fn play_turn(&mut self, coords: Coord2) -> Result<ClickEvent> {
        if self.board[coords].is_mine() {
            self.board.reveal(coords);
            let others = self.board.reveal_mines();
            log::debug!(
                "Hit mine at {:?} on turn {}, revealed {} other mines",
                coords,
                self.turns.turn(),
                others
            );
            self.end_game(GameStatus::Lost);
            return Ok(ClickEvent::Lost);
        }

        let opened = self.board.reveal(coords);
        log::debug!(
            "Turn {}: opened {} cells from {:?}",
            self.turns.turn(),
            opened,
            coords
        );

        if is_cleared(&self.board, self.config.mines) {
            self.end_game(GameStatus::Won);
            return Ok(ClickEvent::Won);
        }

        if self.turns.reposition_due() {
            self.placer.place_mines(&mut self.board, self.config.mines)?;
            log::debug!("Mines repositioned after turn {}", self.turns.turn());
            return Ok(ClickEvent::Repositioned);
        }

        Ok(ClickEvent::Revealed)
    }

    fn end_game(&mut self, status: GameStatus) {
        debug_assert!(status.is_finished());
        self.status = status;
        log::debug!("Game ended {:?} after {} turns", status, self.turns.turn());
    }
}

impl<P> GameEngine<P> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn turn(&self) -> u32 {
        self.turns.turn()
    }

    pub fn reposition_interval(&self) -> u32 {
        self.turns.interval()
    }

    pub fn turns_until_reposition(&self) -> u32 {
        self.turns.turns_until_reposition()
    }

    /// Event of the latest counted click, [`ClickEvent::Ignored`] before the first one.
    pub fn last_event(&self) -> ClickEvent {
        self.last_event
    }

    pub fn placer(&self) -> &P {
        &self.placer
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    /// Lays out a fixed sequence of mine layouts, repeating the last one.
    struct ScriptedPlacer {
        layouts: Vec<Vec<Coord2>>,
        calls: usize,
    }

    impl ScriptedPlacer {
        fn new(layouts: Vec<Vec<Coord2>>) -> Self {
            Self { layouts, calls: 0 }
        }
    }

    impl MinePlacer for ScriptedPlacer {
        fn place_mines(&mut self, board: &mut Board, mine_count: CellCount) -> Result<()> {
            let layout = &self.layouts[self.calls.min(self.layouts.len() - 1)];
            self.calls += 1;
            assert_eq!(layout.len(), usize::from(mine_count));
            crate::placer::mine_candidates(board, mine_count)?;
            crate::placer::lay_mines(board, layout);
            Ok(())
        }
    }

    /// Counts placements made by the wrapped placer.
    struct CountingPlacer<P> {
        inner: P,
        calls: usize,
    }

    impl<P: MinePlacer> MinePlacer for CountingPlacer<P> {
        fn place_mines(&mut self, board: &mut Board, mine_count: CellCount) -> Result<()> {
            self.calls += 1;
            self.inner.place_mines(board, mine_count)
        }
    }

    fn counting(seed: u64) -> CountingPlacer<RandomMinePlacer> {
        CountingPlacer {
            inner: RandomMinePlacer::new(seed),
            calls: 0,
        }
    }

    fn scripted(
        size: Coord2,
        interval: u32,
        layouts: Vec<Vec<Coord2>>,
    ) -> GameEngine<ScriptedPlacer> {
        let mines = layouts[0].len() as CellCount;
        let config = GameConfig::new(size, mines, interval).unwrap();
        GameEngine::with_placer(config, ScriptedPlacer::new(layouts)).unwrap()
    }

    fn hidden_safe<P>(engine: &GameEngine<P>) -> Option<Coord2> {
        engine
            .board()
            .iter()
            .find(|cell| !cell.is_revealed() && !cell.is_mine())
            .map(Cell::coords)
    }

    fn hidden_numbered_safe<P>(engine: &GameEngine<P>) -> Option<Coord2> {
        engine
            .board()
            .iter()
            .find(|cell| !cell.is_revealed() && !cell.is_mine() && cell.adjacent_mines() > 0)
            .map(Cell::coords)
            .or_else(|| hidden_safe(engine))
    }

    fn any_mine<P>(engine: &GameEngine<P>) -> Coord2 {
        engine.board().mine_coords()[0]
    }

    fn assert_hints_current(board: &Board) {
        for cell in board.iter().filter(|cell| !cell.is_mine()) {
            assert_eq!(
                cell.adjacent_mines(),
                board.adjacent_mine_count(cell.coords())
            );
        }
    }

    #[test]
    fn new_game_is_hidden_and_playing() {
        let engine = GameEngine::new(GameConfig::default(), 9).unwrap();

        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.turn(), 0);
        assert_eq!(engine.board().mine_count(), 15);
        assert_eq!(engine.board().revealed_count(), 0);
        assert_eq!(engine.turns_until_reposition(), 3);
        assert_eq!(engine.last_event(), ClickEvent::Ignored);
        assert_eq!(engine.placer().seed(), 9);
    }

    #[test]
    fn invalid_config_fails_before_building() {
        let config = GameConfig::new_unchecked((4, 4), 16, 3);

        assert_eq!(
            GameEngine::new(config, 0).unwrap_err(),
            GameError::InvalidMineCount { mines: 16, max: 15 }
        );
    }

    #[test]
    fn single_numbered_cell_on_tiny_board() {
        let config = GameConfig::square(2, 1, 3).unwrap();
        let mut engine = GameEngine::new(config, 21).unwrap();
        let target = hidden_safe(&engine).unwrap();

        assert_eq!(engine.click(target).unwrap(), ClickEvent::Revealed);
        assert_eq!(engine.board()[target].adjacent_mines(), 1);
        assert_eq!(engine.board().revealed_count(), 1);
        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.turn(), 1);
    }

    #[test]
    fn clicking_the_only_mine_loses() {
        let config = GameConfig::square(5, 1, 3).unwrap();
        let mut engine = GameEngine::new(config, 4).unwrap();
        let mine = any_mine(&engine);

        assert_eq!(engine.click(mine).unwrap(), ClickEvent::Lost);
        assert_eq!(engine.status(), GameStatus::Lost);
        assert!(engine.board()[mine].is_revealed());
        assert_eq!(engine.board().revealed_count(), 1);
        assert_eq!(engine.turn(), 1);
    }

    #[test]
    fn loss_reveals_every_mine() {
        let mut engine = scripted((3, 3), 3, vec![vec![(0, 0), (2, 2)]]);

        assert_eq!(engine.click((2, 2)).unwrap(), ClickEvent::Lost);

        assert!(engine.board()[(0, 0)].is_revealed());
        assert!(engine.board()[(2, 2)].is_revealed());
        assert_eq!(engine.board().revealed_count(), 2);
    }

    #[test]
    fn lone_safe_cell_wins_without_flood() {
        let ring: Vec<Coord2> = (0..3)
            .flat_map(|row| (0..3).map(move |col| (row, col)))
            .filter(|&pos| pos != (1, 1))
            .collect();
        let mut engine = scripted((3, 3), 3, vec![ring]);

        assert_eq!(engine.click((1, 1)).unwrap(), ClickEvent::Won);
        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(engine.board()[(1, 1)].adjacent_mines(), 8);
        assert_eq!(engine.board().revealed_count(), 1);
    }

    #[test]
    fn flood_fill_can_win_in_one_click() {
        let mut engine = scripted((3, 3), 3, vec![vec![(2, 2)]]);

        assert_eq!(engine.click((0, 0)).unwrap(), ClickEvent::Won);
        assert_eq!(engine.board().revealed_count(), 8);
        assert!(!engine.board()[(2, 2)].is_revealed());
    }

    #[test]
    fn ignored_clicks_do_not_count() {
        let mut engine = scripted((3, 3), 1, vec![vec![(0, 0)]]);

        assert_eq!(engine.click((1, 1)).unwrap(), ClickEvent::Repositioned);
        assert_eq!(engine.placer().calls, 2);

        assert_eq!(engine.click((1, 1)).unwrap(), ClickEvent::Ignored);
        assert_eq!(engine.click((3, 0)).unwrap(), ClickEvent::Ignored);
        assert_eq!(engine.click((0, 200)).unwrap(), ClickEvent::Ignored);

        assert_eq!(engine.turn(), 1);
        assert_eq!(engine.placer().calls, 2);
        assert_eq!(engine.last_event(), ClickEvent::Repositioned);
    }

    #[test]
    fn finished_game_is_frozen() {
        let mut engine = scripted((4, 4), 2, vec![vec![(0, 0), (3, 3)]]);
        assert_eq!(engine.click((0, 1)).unwrap(), ClickEvent::Revealed);
        assert_eq!(engine.click((0, 0)).unwrap(), ClickEvent::Lost);

        let board = engine.board().clone();
        let turn = engine.turn();
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(engine.click((row, col)).unwrap(), ClickEvent::Ignored);
            }
        }

        assert_eq!(engine.board(), &board);
        assert_eq!(engine.turn(), turn);
        assert_eq!(engine.status(), GameStatus::Lost);
        assert_eq!(engine.last_event(), ClickEvent::Lost);
    }

    #[test]
    fn won_game_is_frozen() {
        let mut engine = scripted((3, 3), 1, vec![vec![(2, 2)]]);
        engine.click((0, 0)).unwrap();

        assert_eq!(engine.click((2, 2)).unwrap(), ClickEvent::Ignored);
        assert_eq!(engine.status(), GameStatus::Won);
        assert!(!engine.board()[(2, 2)].is_revealed());
    }

    #[test]
    fn reposition_follows_cadence() {
        let config = GameConfig::square(10, 30, 3).unwrap();
        let mut engine = GameEngine::with_placer(config, counting(5)).unwrap();

        for click in 1..=9 {
            let target = hidden_numbered_safe(&engine).unwrap();
            let event = engine.click(target).unwrap();

            assert_ne!(event, ClickEvent::Won);
            assert_eq!(event == ClickEvent::Repositioned, click % 3 == 0);
            assert_eq!(engine.placer().calls, 1 + click / 3);
            assert_eq!(engine.turn(), click as u32);
        }
    }

    #[test]
    fn winning_click_does_not_reposition() {
        let config = GameConfig::square(3, 8, 1).unwrap();
        let mut engine = GameEngine::with_placer(config, counting(13)).unwrap();
        let safe = hidden_safe(&engine).unwrap();

        assert_eq!(engine.click(safe).unwrap(), ClickEvent::Won);
        assert_eq!(engine.placer().calls, 1);
    }

    #[test]
    fn reposition_every_turn_avoids_revealed_cells() {
        for seed in 0..16 {
            let config = GameConfig::square(6, 5, 1).unwrap();
            let mut engine = GameEngine::new(config, seed).unwrap();
            let mut revealed = 0;

            while let Some(target) = hidden_safe(&engine) {
                let event = engine.click(target).unwrap();
                let board = engine.board();

                assert!(board.revealed_count() > revealed);
                revealed = board.revealed_count();

                match event {
                    ClickEvent::Repositioned => {
                        assert_eq!(board.mine_count(), 5);
                        assert!(board
                            .iter()
                            .filter(|cell| cell.is_mine())
                            .all(|cell| !cell.is_revealed()));
                        assert_hints_current(board);
                    }
                    ClickEvent::Won => break,
                    other => panic!("unexpected event {other:?}"),
                }
            }

            assert_eq!(engine.status(), GameStatus::Won);
            assert_eq!(engine.board().revealed_count(), config.safe_cells());
        }
    }

    #[test]
    fn reposition_moves_mines_to_next_layout() {
        let mut engine = scripted((3, 4), 2, vec![vec![(0, 0)], vec![(2, 3)]]);

        assert_eq!(engine.click((0, 1)).unwrap(), ClickEvent::Revealed);
        assert_eq!(engine.click((1, 0)).unwrap(), ClickEvent::Repositioned);

        assert_eq!(engine.board().mine_coords(), vec![(2, 3)]);
        assert_eq!(engine.board()[(0, 1)].adjacent_mines(), 0);
        assert_eq!(engine.turns_until_reposition(), 2);
    }

    #[test]
    fn failing_reposition_is_reported() {
        struct FailOnRepeat(usize);

        impl MinePlacer for FailOnRepeat {
            fn place_mines(&mut self, board: &mut Board, mine_count: CellCount) -> Result<()> {
                self.0 += 1;
                if self.0 > 1 {
                    return Err(GameError::UnsatisfiablePlacement {
                        requested: mine_count,
                        available: 0,
                    });
                }
                crate::placer::lay_mines(board, &[(0, 0)]);
                Ok(())
            }
        }

        let config = GameConfig::square(3, 1, 1).unwrap();
        let mut engine = GameEngine::with_placer(config, FailOnRepeat(0)).unwrap();

        assert_eq!(
            engine.click((1, 1)),
            Err(GameError::UnsatisfiablePlacement {
                requested: 1,
                available: 0
            })
        );
    }

    #[test]
    fn restart_starts_over() {
        let mut engine = scripted((3, 3), 3, vec![vec![(0, 0)], vec![(2, 2)]]);
        engine.click((0, 0)).unwrap();
        assert!(engine.is_finished());

        engine.restart().unwrap();

        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.turn(), 0);
        assert_eq!(engine.board().revealed_count(), 0);
        assert_eq!(engine.board().mine_coords(), vec![(2, 2)]);
    }
}
