use log::info;
use rand::Rng;

use crate::config::EASY_SLOWDOWN;
use crate::error::NoFreeCellError;
use crate::food::{Food, FoodKind};
use crate::wall::StoneWall;
use crate::world::World;

/// Extra figs that join the permanent one in Hard.
pub const HARD_EXTRA_FIGS: usize = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tier {
    Easy,
    Hard,
}

impl Tier {
    pub fn level(self) -> u8 {
        match self {
            Tier::Easy => 1,
            Tier::Hard => 2,
        }
    }

    pub fn tick_rate(self, base_rate: u32) -> u32 {
        match self {
            Tier::Easy => base_rate.saturating_sub(EASY_SLOWDOWN).max(1),
            Tier::Hard => base_rate,
        }
    }
}

impl<R: Rng> World<R> {
    /// Restarts the round under `tier`. Selecting the current tier again
    /// also restarts it, with freshly placed obstacles.
    pub fn switch_tier(&mut self, tier: Tier) -> Result<(), NoFreeCellError> {
        info!("switching to tier {} ({:?})", tier.level(), tier);

        self.tier = tier;
        self.snake.reset();
        self.figs.truncate(1);
        self.wall = None;

        if tier == Tier::Hard {
            let occupied = self.occupied();
            self.wall = Some(StoneWall::spawn(&self.grid, &occupied, &mut self.rng)?);

            for _ in 0..HARD_EXTRA_FIGS {
                let occupied = self.occupied();
                let fig = Food::spawn(FoodKind::Shrink, &self.grid, &occupied, &mut self.rng)?;
                self.figs.push(fig);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BASE_TICK_RATE, GRID_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::grid::{Cell, Direction::*, Grid};
    use crate::snake::Snake;
    use crate::wall::WALL_LENGTH;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn world(seed: u64) -> World<StdRng> {
        let grid = Grid::new(SCREEN_WIDTH, SCREEN_HEIGHT, GRID_SIZE);
        World::new(grid, StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn tick_rates() {
        assert_eq!(Tier::Easy.tick_rate(BASE_TICK_RATE), 10);
        assert_eq!(Tier::Hard.tick_rate(BASE_TICK_RATE), 20);
        assert_eq!(Tier::Easy.tick_rate(5), 1);
    }

    #[test]
    fn levels_match_the_number_keys() {
        assert_eq!(Tier::Easy.level(), 1);
        assert_eq!(Tier::Hard.level(), 2);
    }

    #[test]
    fn hard_adds_one_wall_and_two_figs_off_the_snake() {
        for seed in 0..12 {
            let mut world = world(seed);
            world.snake = Snake::from_positions(
                vec![Cell::new(100, 100), Cell::new(80, 100), Cell::new(60, 100)],
                Right,
                world.grid.center(),
            );

            world.switch_tier(Tier::Hard).unwrap();

            assert_eq!(world.tier(), Tier::Hard);
            assert_eq!(world.snake().positions(), &[world.grid.center()]);
            assert_eq!(world.figs().len(), 1 + HARD_EXTRA_FIGS);

            let wall = world.wall().unwrap();
            assert_eq!(wall.cells().len(), WALL_LENGTH);
            assert!(matches!(wall.axis(), Down | Right));
            for pair in wall.cells().windows(2) {
                assert_eq!(world.grid.wrap(pair[0], wall.axis()), pair[1]);
            }

            let snake: HashSet<Cell> = world.snake().positions().iter().copied().collect();
            assert!(wall.cells().iter().all(|c| !snake.contains(c)));
            assert!(world.figs().iter().all(|f| !snake.contains(&f.position())));
            assert!(world.figs().iter().all(|f| !wall.contains(f.position())));

            // Nothing stacked: snake + apple + 3 figs + 9 wall cells
            assert_eq!(world.occupied().len(), 1 + 1 + 3 + WALL_LENGTH);
        }
    }

    #[test]
    fn easy_drops_the_obstacles() {
        let mut world = world(3);
        world.switch_tier(Tier::Hard).unwrap();
        let fig = world.figs()[0].clone();

        world.switch_tier(Tier::Easy).unwrap();

        assert_eq!(world.tier(), Tier::Easy);
        assert!(world.wall().is_none());
        assert_eq!(world.figs(), &[fig]);
    }

    #[test]
    fn reselecting_hard_rebuilds_the_wall() {
        let mut world = world(8);
        world.switch_tier(Tier::Hard).unwrap();
        world.switch_tier(Tier::Hard).unwrap();

        assert!(world.wall().is_some());
        assert_eq!(world.figs().len(), 3);
    }
}
