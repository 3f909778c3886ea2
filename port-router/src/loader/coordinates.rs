//! Map positions of well-known ports.
//!
//! Ports files usually list only `name dailyCharge`; positions for the
//! guided search come from this table, on a 1050x700 display map.

use crate::domain::Coordinates;

/// Position of a well-known port, or `None` for names not in the table.
pub fn known_coordinates(name: &str) -> Option<Coordinates> {
    let (x, y) = match name {
        "Chittagong" => (745, 358),
        "Karachi" => (678, 350),
        "Dublin" => (476, 257),
        "Marseille" => (510, 292),
        "Jeddah" => (604, 359),
        "Colombo" => (714, 402),
        "Sydney" => (907, 521),
        "Melbourne" => (891, 531),
        "Montreal" => (294, 284),
        "Doha" => (635, 349),
        "Manila" => (823, 380),
        "Alexandria" => (575, 332),
        "Istanbul" => (574, 301),
        "Singapore" => (776, 416),
        "Busan" => (848, 318),
        "HongKong" => (804, 357),
        "Durban" => (577, 505),
        "Oslo" => (524, 231),
        "Dubai" => (645, 351),
        "Genoa" => (519, 288),
        "Osaka" => (865, 321),
        "Lisbon" => (469, 307),
        "Hamburg" => (522, 257),
        "Rotterdam" => (510, 258),
        "Helsinki" => (564, 228),
        "Mumbai" => (696, 370),
        "Jakarta" => (787, 434),
        "Tokyo" => (877, 318),
        "Athens" => (558, 309),
        "CapeTown" => (545, 519),
        "Stockholm" => (544, 232),
        "PortLouis" => (658, 485),
        "Shanghai" => (825, 329),
        "NewYork" => (291, 299),
        "AbuDhabi" => (644, 352),
        "Copenhagen" => (528, 249),
        "Vancouver" => (154, 271),
        "LosAngeles" => (168, 323),
        "Antwerp" => (504, 265),
        "London" => (494, 263),
        _ => return None,
    };
    Some(Coordinates::new(f64::from(x), f64::from(y)))
}
