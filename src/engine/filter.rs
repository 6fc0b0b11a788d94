use crate::model::{Column, Dataset, FilterSpec, PlayerRecord};

/// Apply the position, minutes and search predicates (all must pass).
/// A predicate whose column is absent from the dataset is skipped.
pub fn apply_filters<'a>(dataset: &'a Dataset, spec: &FilterSpec) -> Vec<&'a PlayerRecord> {
    let position = spec
        .position_filter()
        .filter(|_| dataset.has(Column::Pos))
        .map(str::to_lowercase);
    let min_minutes = Some(spec.min_minutes)
        .filter(|m| *m > 0 && dataset.has(Column::Min))
        .map(f64::from);
    let search = Some(spec.search.as_str())
        .filter(|s| !s.is_empty() && dataset.has(Column::Player))
        .map(str::to_lowercase);

    dataset
        .players()
        .iter()
        .filter(|p| match &position {
            Some(needle) => p
                .position
                .as_deref()
                .is_some_and(|pos| pos.to_lowercase().contains(needle.as_str())),
            None => true,
        })
        .filter(|p| match min_minutes {
            Some(threshold) => p.minutes.is_some_and(|m| m >= threshold),
            None => true,
        })
        .filter(|p| match &search {
            Some(needle) => p.name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect()
}

/// The U23 players of a row-set; empty when the dataset has no U23 flag
pub fn split_u23<'a>(dataset: &Dataset, rows: &[&'a PlayerRecord]) -> Vec<&'a PlayerRecord> {
    if !dataset.has(Column::U23) {
        log::warn!("'U23' column missing; U23 selection is empty.");
        return Vec::new();
    }
    rows.iter().copied().filter(|p| p.is_u23).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column::*;
    use crate::model::ALL_POSITIONS;

    fn sample() -> Dataset {
        Dataset::new(
            [Player, Pos, Squad, Age, Min, Gls, U23],
            vec![
                PlayerRecord::new("Alex Smith").with_position("FW").with_age(22.0).with_stat(Min, 900.0),
                PlayerRecord::new("Ben Jones").with_position("MF,FW").with_age(25.0).with_stat(Min, 800.0),
                PlayerRecord::new("Cal Smith").with_position("DF").with_age(20.0).with_stat(Min, 200.0),
                PlayerRecord::new("Dan Nobody").with_age(19.0),
            ],
        )
    }

    fn names(rows: &[&PlayerRecord]) -> Vec<String> {
        rows.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let ds = sample();
        assert_eq!(apply_filters(&ds, &FilterSpec::new()).len(), 4);
    }

    #[test]
    fn test_position_is_case_insensitive_substring() {
        let ds = sample();
        let rows = apply_filters(&ds, &FilterSpec::new().with_position("fw"));
        assert_eq!(names(&rows), vec!["Alex Smith", "Ben Jones"]);
    }

    #[test]
    fn test_min_minutes_excludes_missing_minutes() {
        let ds = sample();
        let rows = apply_filters(&ds, &FilterSpec::new().with_min_minutes(500));
        assert_eq!(names(&rows), vec!["Alex Smith", "Ben Jones"]);
    }

    #[test]
    fn test_search_and_position_combine() {
        let ds = sample();
        let spec = FilterSpec::new().with_search("SMITH").with_position("DF");
        assert_eq!(names(&apply_filters(&ds, &spec)), vec!["Cal Smith"]);
    }

    #[test]
    fn test_all_sentinel_in_position_field_keeps_everyone() {
        let ds = sample();
        let spec = FilterSpec {
            position: Some(ALL_POSITIONS.to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(apply_filters(&ds, &spec).len(), 4);
    }

    #[test]
    fn test_search_keeps_leading_space() {
        let ds = Dataset::new(
            [Player],
            vec![PlayerRecord::new("Ian Smith"), PlayerRecord::new("Smithson")],
        );
        let rows = apply_filters(&ds, &FilterSpec::new().with_search(" smith"));
        assert_eq!(names(&rows), vec!["Ian Smith"]);

        let spec = FilterSpec {
            search: " smith".to_string(),
            ..FilterSpec::default()
        };
        assert_eq!(apply_filters(&ds, &spec).len(), 1);
    }

    #[test]
    fn test_predicates_skipped_for_absent_columns() {
        let ds = Dataset::new([Player], vec![PlayerRecord::new("A"), PlayerRecord::new("B")]);
        let spec = FilterSpec::new().with_position("FW").with_min_minutes(900);
        assert_eq!(apply_filters(&ds, &spec).len(), 2);
    }

    #[test]
    fn test_split_u23() {
        let ds = sample();
        let rows = apply_filters(&ds, &FilterSpec::new());
        assert_eq!(names(&split_u23(&ds, &rows)), vec!["Alex Smith", "Cal Smith", "Dan Nobody"]);

        let no_flag = Dataset::new([Player, Age], vec![PlayerRecord::new("A").with_age(20.0)]);
        let rows = apply_filters(&no_flag, &FilterSpec::new());
        assert!(split_u23(&no_flag, &rows).is_empty());
    }
}
