use serde::Serialize;

/// Sequences shorter than this show each bar's value.
pub const LABEL_MAX_EXCLUSIVE_LEN: usize = 25;
/// Sequences up to this length animate bar transitions.
pub const ANIMATE_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarStyle {
    pub height_percent: u32,
    pub show_label: bool,
    pub animate: bool,
}

/// Values are already percentages of the chart height.
#[must_use]
pub fn bar_height_percent(value: u32) -> u32 {
    value.min(100)
}

#[must_use]
pub fn bar_style(value: u32, sequence_len: usize) -> BarStyle {
    BarStyle {
        height_percent: bar_height_percent(value),
        show_label: sequence_len < LABEL_MAX_EXCLUSIVE_LEN,
        animate: sequence_len <= ANIMATE_MAX_LEN,
    }
}

#[must_use]
pub fn bar_styles(values: &[u32]) -> Vec<BarStyle> {
    values
        .iter()
        .map(|&value| bar_style(value, values.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_tracks_value_and_clamps() {
        assert_eq!(bar_height_percent(0), 0);
        assert_eq!(bar_height_percent(42), 42);
        assert_eq!(bar_height_percent(250), 100);
    }

    #[test]
    fn test_label_and_animation_thresholds() {
        assert!(bar_style(10, 24).show_label);
        assert!(!bar_style(10, 25).show_label);
        assert!(bar_style(10, 50).animate);
        assert!(!bar_style(10, 51).animate);
    }

    #[test]
    fn test_styles_are_deterministic() {
        let values = [5, 95, 40];
        assert_eq!(bar_styles(&values), bar_styles(&values));
        assert_eq!(bar_styles(&values)[1].height_percent, 95);
    }
}
