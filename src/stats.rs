use crate::model::{Category, Classification, Record};

/// Aggregate counts shown on the title page and in page footers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    total: usize,
    by_classification: [usize; Classification::ALL.len()],
    by_category: [usize; Category::ALL.len()],
}

impl Stats {
    /// Counts records in a single pass.
    pub fn collect<R: Record>(records: &[R]) -> Self {
        let mut stats = Stats::default();
        for record in records {
            stats.total += 1;
            let classification = Classification::from_label(record.classification());
            stats.by_classification[classification.index()] += 1;
            if let Some(category) = Category::from_label(record.category()) {
                stats.by_category[category.index()] += 1;
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn classification(&self, classification: Classification) -> usize {
        self.by_classification[classification.index()]
    }

    pub fn category(&self, category: Category) -> usize {
        self.by_category[category.index()]
    }

    /// Records whose category is none of the named ones.
    pub fn uncategorized(&self) -> usize {
        self.total - self.by_category.iter().sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TestCase;

    fn case(category: &str, kind: &str) -> TestCase {
        TestCase {
            id: "TC".into(),
            title: "t".into(),
            steps: vec![],
            test_data: None,
            expected_result: "e".into(),
            category: category.into(),
            kind: kind.into(),
        }
    }

    #[test]
    fn empty_input_is_all_zero() {
        let stats = Stats::collect::<TestCase>(&[]);
        assert_eq!(stats, Stats::default());
        assert_eq!(stats.uncategorized(), 0);
    }

    #[test]
    fn counts_per_classification_and_category() {
        let cases = [
            case("Positive", "Sanity"),
            case("Positive", "Regression"),
            case("Negative", "Security"),
            case("Edge", "Smoke"),
            case("Exploratory", "Performance"),
            case("Non-Functional", "Performance"),
        ];
        let stats = Stats::collect(&cases);

        assert_eq!(stats.total(), 6);
        assert_eq!(stats.classification(Classification::Performance), 2);
        assert_eq!(stats.classification(Classification::Unrecognized), 1);
        assert_eq!(stats.category(Category::Positive), 2);
        assert_eq!(stats.category(Category::Authorization), 0);
        assert_eq!(stats.uncategorized(), 1);

        let by_classification: usize = Classification::ALL
            .iter()
            .map(|&c| stats.classification(c))
            .sum();
        assert_eq!(by_classification, stats.total());
        let named: usize = Category::ALL.iter().map(|&c| stats.category(c)).sum();
        assert!(named <= stats.total());
    }
}
