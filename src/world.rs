use std::collections::HashSet;

use rand::Rng;

use crate::entity::{occupied_cells, Entity};
use crate::error::NoFreeCellError;
use crate::food::{Food, FoodKind};
use crate::grid::{Cell, Grid};
use crate::mode::Tier;
use crate::snake::Snake;
use crate::wall::StoneWall;

/// Everything on the board for one run of the game.
pub struct World<R> {
    pub(crate) grid: Grid,
    pub(crate) rng: R,
    pub(crate) tier: Tier,
    pub(crate) snake: Snake,
    pub(crate) apple: Food,
    // figs[0] is present in every tier, the rest only in Hard
    pub(crate) figs: Vec<Food>,
    pub(crate) wall: Option<StoneWall>,
}

impl<R: Rng> World<R> {
    /// Easy board: snake in the center, one apple, one fig.
    pub fn new(grid: Grid, mut rng: R) -> Result<Self, NoFreeCellError> {
        let snake = Snake::new(grid.center());

        let mut occupied = occupied_cells(vec![Some(Entity::Snake(&snake))]);
        let apple = Food::spawn(FoodKind::Grow, &grid, &occupied, &mut rng)?;
        occupied.insert(apple.position());
        let fig = Food::spawn(FoodKind::Shrink, &grid, &occupied, &mut rng)?;

        Ok(World { grid, rng, tier: Tier::Easy, snake, apple, figs: vec![fig], wall: None })
    }
}

impl<R> World<R> {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn apple(&self) -> &Food {
        &self.apple
    }

    pub fn figs(&self) -> &[Food] {
        &self.figs
    }

    pub fn wall(&self) -> Option<&StoneWall> {
        self.wall.as_ref()
    }

    /// Live entities, snake first.
    pub fn entities(&self) -> Vec<Option<Entity<'_>>> {
        let mut entities = vec![Some(Entity::Snake(&self.snake)), Some(Entity::Food(&self.apple))];
        entities.extend(self.figs.iter().map(|fig| Some(Entity::Food(fig))));
        entities.push(self.wall.as_ref().map(Entity::Wall));
        entities
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        occupied_cells(self.entities())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GRID_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn starts_in_easy_with_nothing_stacked() {
        for seed in 0..10 {
            let grid = Grid::new(SCREEN_WIDTH, SCREEN_HEIGHT, GRID_SIZE);
            let world = World::new(grid, StdRng::seed_from_u64(seed)).unwrap();

            assert_eq!(world.tier(), Tier::Easy);
            assert_eq!(world.figs().len(), 1);
            assert!(world.wall().is_none());
            assert_eq!(world.snake().positions(), &[grid.center()]);
            assert_ne!(world.apple().position(), grid.center());
            assert_ne!(world.figs()[0].position(), grid.center());
            assert_ne!(world.figs()[0].position(), world.apple().position());
            assert_eq!(world.occupied().len(), 3);
        }
    }

    #[test]
    fn tiny_board_cannot_fit_the_fig() {
        let grid = Grid::new(40, 20, 20);
        let err = World::new(grid, StdRng::seed_from_u64(0)).err().unwrap();
        assert_eq!(err.item, "fig");
    }
}
