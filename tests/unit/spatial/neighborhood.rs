//! Tests for clamped neighborhood spans and iteration

#[cfg(test)]
mod tests {
    use allcolors::spatial::Position;
    use allcolors::spatial::neighborhood::{neighbors, region_spans};

    // Tests the radius-1 neighborhood of an interior cell is the Moore neighborhood
    // Verified by including the center position
    #[test]
    fn test_interior_moore_neighborhood() {
        let result: Vec<Position> = neighbors(Position::new(2, 2), 1, 5, 5).collect();

        assert_eq!(result.len(), 8);
        assert!(!result.contains(&Position::new(2, 2)));
        assert!(result.contains(&Position::new(1, 1)));
        assert!(result.contains(&Position::new(3, 3)));
    }

    // Tests corners are clamped to the canvas
    // Verified by removing the saturating subtraction
    #[test]
    fn test_corner_clamped() {
        let result: Vec<Position> = neighbors(Position::new(0, 0), 1, 5, 5).collect();

        assert_eq!(
            result,
            vec![
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1)
            ]
        );
    }

    // Tests larger radii cover the full square window
    // Verified by using the radius only on one axis
    #[test]
    fn test_radius_two_window() {
        let (xs, ys) = region_spans(Position::new(5, 5), 2, 20, 20);
        assert_eq!(xs, 3..8);
        assert_eq!(ys, 3..8);

        assert_eq!(neighbors(Position::new(5, 5), 2, 20, 20).count(), 24);
    }

    // Tests spans never exceed the canvas on the far edge
    // Verified by removing the upper clamp
    #[test]
    fn test_far_edge_clamped() {
        let (xs, ys) = region_spans(Position::new(4, 2), 3, 5, 3);
        assert_eq!(xs, 1..5);
        assert_eq!(ys, 0..3);
    }

    // Tests a 1x1 canvas has no neighbors
    // Verified by forgetting to exclude the center
    #[test]
    fn test_single_cell_has_no_neighbors() {
        assert_eq!(neighbors(Position::new(0, 0), 1, 1, 1).count(), 0);
    }
}
