use log::debug;
use rand::Rng;

use crate::{snake::Snake, Coords, GridInt};

/// Picks a random interior cell the snake does not occupy.
///
/// The outermost ring of the board never receives food. Loops forever if the
/// snake covers every interior cell.
pub fn place_food<R: Rng>(snake: &Snake, grid_size: GridInt, rng: &mut R) -> Coords {
    loop {
        let cell = (rng.gen_range(1..grid_size - 1), rng.gen_range(1..grid_size - 1));

        if !snake.contains(cell) {
            debug!("Food placed at {:?}", cell);
            return cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_food_stays_in_interior() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::new((10, 10), 3, Direction::Right);

        for _ in 0..500 {
            let (x, y) = place_food(&snake, 20, &mut rng);
            assert!((1..=18).contains(&x));
            assert!((1..=18).contains(&y));
            assert!(!snake.contains((x, y)));
        }
    }

    #[test]
    fn test_food_finds_last_free_interior_cell() {
        // 5x5 board has a 3x3 interior; cover all of it but (3, 3)
        let mut cells = vec![];
        for y in 1..=3 {
            for x in 1..=3 {
                if (x, y) != (3, 3) {
                    cells.push((x, y));
                }
            }
        }
        let snake = Snake::from_cells(&cells);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(place_food(&snake, 5, &mut rng), (3, 3));
        }
    }

    #[test]
    fn test_food_avoids_snake_of_every_length() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = 8;

        // Grow a snake row by row across the interior, one cell at a time
        let interior: Vec<Coords> = (1..grid - 1)
            .flat_map(|y| (1..grid - 1).map(move |x| (x, y)))
            .collect();

        for len in 1..interior.len() {
            let snake = Snake::from_cells(&interior[..len]);
            let food = place_food(&snake, grid, &mut rng);
            assert!(!snake.contains(food), "food on snake at length {}", len);
        }
    }
}
