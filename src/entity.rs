//! The closed set of things that live on the board, and the occupancy
//! query used when placing new ones.

use std::collections::HashSet;

use crate::config::{Rgb, BORDER_COLOR, SNAKE_COLOR, WALL_COLOR};
use crate::food::Food;
use crate::grid::Cell;
use crate::snake::Snake;
use crate::wall::StoneWall;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderSpec {
    pub fill: Rgb,
    pub border: Rgb,
}

#[derive(Copy, Clone)]
pub enum Entity<'a> {
    Snake(&'a Snake),
    Food(&'a Food),
    Wall(&'a StoneWall),
}

impl<'a> Entity<'a> {
    pub fn occupied_cells(&self) -> &'a [Cell] {
        match *self {
            Entity::Snake(snake) => snake.positions(),
            Entity::Food(food) => food.position_slice(),
            Entity::Wall(wall) => wall.cells(),
        }
    }

    pub fn render_spec(&self) -> RenderSpec {
        let fill = match *self {
            Entity::Snake(_) => SNAKE_COLOR,
            Entity::Food(food) => food.kind().color(),
            Entity::Wall(_) => WALL_COLOR,
        };
        RenderSpec { fill, border: BORDER_COLOR }
    }
}

/// Union of every cell covered by the given entities. Absent entities are
/// simply skipped.
pub fn occupied_cells<'a, I>(entities: I) -> HashSet<Cell>
where
    I: IntoIterator<Item = Option<Entity<'a>>>,
{
    entities
        .into_iter()
        .flatten()
        .flat_map(|entity| entity.occupied_cells().iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{APPLE_COLOR, FIG_COLOR};
    use crate::food::FoodKind;
    use crate::grid::{Direction::Right, Grid};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn union_skips_absent_entities_and_duplicates() {
        let grid = Grid::new(200, 200, 20);
        let mut rng = StdRng::seed_from_u64(9);
        let snake = Snake::from_positions(
            vec![Cell::new(40, 40), Cell::new(20, 40), Cell::new(0, 40)],
            Right,
            grid.center(),
        );
        let mut apple = Food::spawn(FoodKind::Grow, &grid, &HashSet::new(), &mut rng).unwrap();
        apple.place(Cell::new(20, 40));
        let wall: Option<StoneWall> = None;

        let occupied = occupied_cells(vec![
            Some(Entity::Snake(&snake)),
            Some(Entity::Food(&apple)),
            wall.as_ref().map(Entity::Wall),
        ]);

        let expected: HashSet<Cell> =
            [Cell::new(40, 40), Cell::new(20, 40), Cell::new(0, 40)].iter().copied().collect();
        assert_eq!(occupied, expected);
    }

    #[test]
    fn render_spec_by_variant() {
        let grid = Grid::new(200, 200, 20);
        let mut rng = StdRng::seed_from_u64(9);
        let apple = Food::spawn(FoodKind::Grow, &grid, &HashSet::new(), &mut rng).unwrap();
        let fig = Food::spawn(FoodKind::Shrink, &grid, &HashSet::new(), &mut rng).unwrap();
        let snake = Snake::new(grid.center());

        assert_eq!(Entity::Food(&apple).render_spec().fill, APPLE_COLOR);
        assert_eq!(Entity::Food(&fig).render_spec().fill, FIG_COLOR);
        assert_eq!(Entity::Snake(&snake).render_spec().fill, SNAKE_COLOR);
        assert_eq!(Entity::Snake(&snake).render_spec().border, BORDER_COLOR);
        assert_eq!(Entity::Food(&fig).occupied_cells(), &[fig.position()]);
    }
}
