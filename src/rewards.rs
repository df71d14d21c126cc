use crate::models::Reward;

/// The treasury catalog. Compiled in, never persisted, not configurable at
/// runtime.
pub const REWARDS: &[Reward] = &[
    Reward {
        id: "1",
        title: "Order Royal Takeout",
        cost: 50,
        icon: "\u{1F355}",
    },
    Reward {
        id: "2",
        title: "Cinema Night",
        cost: 100,
        icon: "\u{1F3AC}",
    },
    Reward {
        id: "3",
        title: "Back Massage (20m)",
        cost: 75,
        icon: "\u{1F486}",
    },
    Reward {
        id: "4",
        title: "Weekend Getaway",
        cost: 500,
        icon: "\u{1F3F0}",
    },
    Reward {
        id: "5",
        title: "Breakfast in Bed",
        cost: 150,
        icon: "\u{1F950}",
    },
];
