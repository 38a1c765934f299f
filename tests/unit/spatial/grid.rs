//! Tests for grid construction, neighbour lookup and solve resets

#[cfg(test)]
mod tests {
    use mazegen::MazeError;
    use mazegen::spatial::{CellType, Coord, Grid, Phase};

    // Tests dimension validation rejects sides below three
    // Verified by lowering the minimum to two
    #[test]
    fn test_new_rejects_small_dimensions() {
        for (width, height) in [(2, 5), (5, 2), (0, 0), (1, 3)] {
            match Grid::new(width, height) {
                Err(MazeError::InvalidDimension { minimum, .. }) => assert_eq!(minimum, 3),
                other => unreachable!("Expected InvalidDimension, got {other:?}"),
            }
        }
        assert!(Grid::new(3, 3).is_ok());
    }

    // Tests the initial lattice: odd,odd interior cells open, everything else walled
    // Verified by opening border cells
    #[test]
    fn test_new_lattice_layout() {
        let grid = Grid::new(7, 5).unwrap();

        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.phase(), Phase::Unbuilt);

        for cell in grid.cells() {
            let expected_open =
                cell.x() % 2 == 1 && cell.y() % 2 == 1 && cell.x() < 6 && cell.y() < 4;
            assert_eq!(
                cell.cell_type.is_open(),
                expected_open,
                "Unexpected type at {}",
                cell.position()
            );
            assert!(!cell.visited);
        }

        assert_eq!(grid.count(CellType::Passage), 6);
        assert_eq!(grid.lattice_cells(), 6);
    }

    // Tests lattice counting ignores the trailing column of even-sized grids
    #[test]
    fn test_lattice_cells_even_dimensions() {
        let grid = Grid::new(4, 6).unwrap();
        assert_eq!(grid.lattice_cells(), grid.count(CellType::Passage));
        assert_eq!(grid.lattice_cells(), 2);
    }

    // Tests entrance and exit positions for an 11x11 grid
    #[test]
    fn test_entrance_and_exit() {
        let grid = Grid::new(11, 11).unwrap();
        assert_eq!(grid.entrance(), Coord::new(0, 1));
        assert_eq!(grid.exit(), Coord::new(9, 10));
    }

    // Tests out-of-bounds access returns None
    #[test]
    fn test_cell_out_of_bounds() {
        let mut grid = Grid::new(5, 5).unwrap();

        assert!(grid.cell(Coord::new(5, 0)).is_none());
        assert!(grid.cell(Coord::new(0, 5)).is_none());
        assert!(!grid.contains(Coord::new(5, 5)));
        assert!(!grid.set_cell_type(Coord::new(9, 9), CellType::Passage));
        assert!(!grid.mark_visited(Coord::new(9, 9)));
        assert!(!grid.is_open(Coord::new(9, 9)));
    }

    // Tests neighbour order and filtering at lattice distance
    // Verified by dropping the visited filter
    #[test]
    fn test_unvisited_neighbors_distance_two() {
        let mut grid = Grid::new(7, 7).unwrap();
        let center = Coord::new(3, 3);

        assert_eq!(
            grid.unvisited_neighbors(center, 2),
            vec![
                Coord::new(3, 5),
                Coord::new(3, 1),
                Coord::new(5, 3),
                Coord::new(1, 3),
            ]
        );

        grid.mark_visited(Coord::new(3, 5));
        grid.set_cell_type(Coord::new(1, 3), CellType::Wall);

        assert_eq!(
            grid.unvisited_neighbors(center, 2),
            vec![Coord::new(3, 1), Coord::new(5, 3)]
        );
    }

    // Tests neighbours near the origin do not underflow
    #[test]
    fn test_unvisited_neighbors_at_corner() {
        let grid = Grid::new(5, 5).unwrap();

        assert_eq!(
            grid.unvisited_neighbors(Coord::new(1, 1), 2),
            vec![Coord::new(1, 3), Coord::new(3, 1)]
        );
        assert!(grid.unvisited_neighbors(Coord::new(0, 0), 1).is_empty());
    }

    // Tests opening the wall between two lattice cells
    // Verified by opening the target cell instead of the midpoint
    #[test]
    fn test_open_between() {
        let mut grid = Grid::new(5, 5).unwrap();

        let opened = grid.open_between(Coord::new(1, 1), Coord::new(3, 1));

        assert_eq!(opened, Some(Coord::new(2, 1)));
        let wall = grid.cell(Coord::new(2, 1)).unwrap();
        assert_eq!(wall.cell_type, CellType::Passage);
        assert!(wall.visited);
    }

    // Tests the row-major scan for unreached passages
    // Verified by scanning column-major
    #[test]
    fn test_first_unvisited_passage_row_major() {
        let mut grid = Grid::new(7, 7).unwrap();
        grid.mark_visited(Coord::new(1, 1));

        assert_eq!(grid.first_unvisited_passage(), Some(Coord::new(3, 1)));

        grid.mark_visited(Coord::new(3, 1));
        grid.mark_visited(Coord::new(5, 1));
        assert_eq!(grid.first_unvisited_passage(), Some(Coord::new(1, 3)));

        for y in [1, 3, 5] {
            for x in [1, 3, 5] {
                grid.mark_visited(Coord::new(x, y));
            }
        }
        assert_eq!(grid.first_unvisited_passage(), None);
    }

    // Tests reset clears solver markings but keeps walls
    // Verified by skipping the visited reset
    #[test]
    fn test_reset_for_solve() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_cell_type(Coord::new(1, 1), CellType::Path);
        grid.set_cell_type(Coord::new(3, 1), CellType::Backtracked);
        grid.mark_visited(Coord::new(1, 1));
        grid.mark_visited(Coord::new(0, 0));

        grid.reset_for_solve();

        assert_eq!(grid.cell_type(Coord::new(1, 1)), Some(CellType::Passage));
        assert_eq!(grid.cell_type(Coord::new(3, 1)), Some(CellType::Passage));
        assert_eq!(grid.cell_type(Coord::new(0, 0)), Some(CellType::Wall));
        assert!(grid.cells().all(|cell| !cell.visited));
    }

    // Tests calling reset twice equals calling it once
    #[test]
    fn test_reset_for_solve_idempotent() {
        let mut grid = Grid::new(9, 7).unwrap();
        grid.set_cell_type(Coord::new(3, 3), CellType::Path);
        grid.mark_visited(Coord::new(5, 5));

        grid.reset_for_solve();
        let once = grid.clone();
        grid.reset_for_solve();

        assert_eq!(grid, once);
    }

    // Tests reset leaves an unbuilt grid unbuilt
    #[test]
    fn test_reset_keeps_unbuilt_phase() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.reset_for_solve();
        assert_eq!(grid.phase(), Phase::Unbuilt);
    }

    // Tests clearing visited flags leaves types alone
    #[test]
    fn test_clear_visited() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_cell_type(Coord::new(1, 1), CellType::Path);
        grid.mark_visited(Coord::new(1, 1));

        grid.clear_visited();

        assert_eq!(grid.cell_type(Coord::new(1, 1)), Some(CellType::Path));
        assert!(grid.cells().all(|cell| !cell.visited));
    }
}
