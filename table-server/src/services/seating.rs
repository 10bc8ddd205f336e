//! Seating Plan
//!
//! The store's fixed floor plan for the seat picker: counter slots plus two
//! floors of tables.

use shared::models::SeatOption;
use shared::seat::SeatId;

/// (prefix, count, label) per seat group
const SEAT_GROUPS: [(char, u8, &str); 3] = [
    ('C', 10, "カウンター席"),
    ('A', 5, "1階テーブル"),
    ('B', 15, "2階テーブル"),
];

/// All selectable seats, grouped カウンター → 1階 → 2階
pub fn seat_options() -> Vec<SeatOption> {
    SEAT_GROUPS
        .iter()
        .flat_map(|(prefix, count, label)| {
            (1..=*count).filter_map(move |number| {
                let seat = SeatId::normalize(&format!("{}-{:02}", prefix, number))?;
                Some(SeatOption {
                    label: format!("{}：{}", label, seat),
                    group: label.to_string(),
                    value: seat,
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_options_cover_floor_plan() {
        let options = seat_options();
        assert_eq!(options.len(), 30);

        assert_eq!(options[0].value.as_str(), "C-01");
        assert_eq!(options[0].label, "カウンター席：C-01");
        assert_eq!(options[0].group, "カウンター席");

        assert_eq!(options[9].value.as_str(), "C-10");
        assert_eq!(options[10].value.as_str(), "A-01");
        assert_eq!(options[29].value.as_str(), "B-15");
    }

    #[test]
    fn test_seat_options_all_canonical() {
        for option in seat_options() {
            assert!(SeatId::validate(option.value.as_str()));
        }
    }
}
