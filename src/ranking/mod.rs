use std::fmt;

/// One driver's entry in the comparison: name plus overall efficiency ratio.
/// Identical names are independent entries; the board never dedups.
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub name: String,
    pub ratio: f64,
}

#[derive(Debug)]
pub enum RankingError {
    InvalidInput(String),
}

impl fmt::Display for RankingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for RankingError {}

/// Accumulates reported drivers over one program run so they can be compared
/// at the end. Owned by the orchestrating loop; dropped at exit.
#[derive(Debug)]
pub struct RankingBoard {
    entries: Vec<RankEntry>,
    capacity: usize,
}

impl RankingBoard {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record one reported driver. The orchestrator stops prompting at the
    /// cap, so a full board here means a caller bug.
    pub fn submit(&mut self, name: impl Into<String>, ratio: f64) -> Result<(), RankingError> {
        if self.entries.len() >= self.capacity {
            return Err(RankingError::InvalidInput(format!(
                "driver limit of {} reached",
                self.capacity
            )));
        }
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(RankingError::InvalidInput(format!(
                "efficiency ratio must be a non-negative number, got {}",
                ratio
            )));
        }
        self.entries.push(RankEntry {
            name: name.into(),
            ratio,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered descending by ratio. The comparison only makes sense
    /// with at least two drivers; the relative order of exact ties is
    /// unspecified.
    pub fn compute_ranking(&self) -> Result<Vec<RankEntry>, RankingError> {
        if self.entries.len() < 2 {
            return Err(RankingError::InvalidInput(format!(
                "ranking needs at least 2 drivers, got {}",
                self.entries.len()
            )));
        }
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| {
            b.ratio
                .partial_cmp(&a.ratio)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(ranked)
    }
}

/// The top of a ranked list.
pub fn most_efficient(ranked: &[RankEntry]) -> Result<&RankEntry, RankingError> {
    ranked.first().ok_or_else(|| {
        RankingError::InvalidInput("cannot pick the most efficient driver of an empty ranking".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(entries: &[(&str, f64)]) -> RankingBoard {
        let mut board = RankingBoard::new(10);
        for (name, ratio) in entries {
            board.submit(*name, *ratio).unwrap();
        }
        board
    }

    #[test]
    fn test_ranking_descends() {
        let board = board_with(&[("Ana", 3.0), ("Ben", 12.0), ("Cai", 7.5)]);
        let ranked = board.compute_ranking().unwrap();
        assert_eq!(ranked[0].name, "Ben");
        assert_eq!(ranked[1].name, "Cai");
        assert_eq!(ranked[2].name, "Ana");
    }

    #[test]
    fn test_ties_occupy_top_in_either_order() {
        let board = board_with(&[("A", 5.0), ("B", 20.0), ("C", 20.0)]);
        let ranked = board.compute_ranking().unwrap();
        // A is last; B and C take the top two spots in some order
        assert_eq!(ranked[2].name, "A");
        let top: Vec<&str> = ranked[..2].iter().map(|e| e.name.as_str()).collect();
        assert!(top.contains(&"B"));
        assert!(top.contains(&"C"));
        assert_eq!(ranked[0].ratio, 20.0);
        assert_eq!(ranked[1].ratio, 20.0);
    }

    #[test]
    fn test_second_driver_wins() {
        let board = board_with(&[("First", 1.0), ("Second", 2.5)]);
        let ranked = board.compute_ranking().unwrap();
        let best = most_efficient(&ranked).unwrap();
        assert_eq!(best.name, "Second");
        assert_eq!(best.ratio, 2.5);
    }

    #[test]
    fn test_single_driver_cannot_rank() {
        let board = board_with(&[("Solo", 4.0)]);
        let err = board.compute_ranking().unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_empty_board_cannot_rank() {
        let board = RankingBoard::new(10);
        assert!(board.is_empty());
        assert!(board.compute_ranking().is_err());
    }

    #[test]
    fn test_most_efficient_of_empty_is_error() {
        let err = most_efficient(&[]).unwrap_err();
        assert!(matches!(err, RankingError::InvalidInput(_)));
    }

    #[test]
    fn test_duplicate_names_kept() {
        let board = board_with(&[("Dela Cruz", 2.0), ("Dela Cruz", 8.0)]);
        let ranked = board.compute_ranking().unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].ratio, 8.0);
        assert_eq!(ranked[1].ratio, 2.0);
    }

    #[test]
    fn test_zero_ratios_sort_last() {
        let board = board_with(&[("NoData", 0.0), ("Some", 0.1)]);
        let ranked = board.compute_ranking().unwrap();
        assert_eq!(ranked[0].name, "Some");
        assert_eq!(ranked[1].name, "NoData");
    }

    #[test]
    fn test_capacity_enforced() {
        let mut board = RankingBoard::new(2);
        board.submit("A", 1.0).unwrap();
        board.submit("B", 2.0).unwrap();
        let err = board.submit("C", 3.0).unwrap_err();
        assert!(err.to_string().contains("driver limit"));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_rejects_negative_and_non_finite_ratios() {
        let mut board = RankingBoard::new(10);
        assert!(board.submit("Neg", -1.0).is_err());
        assert!(board.submit("Nan", f64::NAN).is_err());
        assert!(board.submit("Inf", f64::INFINITY).is_err());
        assert!(board.is_empty());
    }
}
