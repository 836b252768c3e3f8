use serde::{Deserialize, Serialize};

/// Fixed display partition used to group modules on the results page and to
/// find padding siblings. Never used for scoring weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleCategory {
    OnlinePresence,
    GettingInAndAround,
    ServiceAndSupport,
}

impl ModuleCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ModuleCategory::OnlinePresence => "Online presence",
            ModuleCategory::GettingInAndAround => "Getting in and around",
            ModuleCategory::ServiceAndSupport => "Service and support",
        }
    }
}

/// A bundled set of assessment questions covering one topic area.
///
/// `id` is stable across catalog versions; the display `code` comes from a
/// fixed lookup and may be reassigned without changing `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDefinition {
    pub id: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub estimated_minutes: u16,
    pub cost: u32,
    pub category: ModuleCategory,
}

pub(crate) fn standard_modules() -> Vec<ModuleDefinition> {
    vec![
        ModuleDefinition {
            id: "digital-content",
            code: "D1",
            name: "Website and digital content",
            description: "Structure, contrast, alt text, and readability of your website and published documents.",
            estimated_minutes: 45,
            cost: 120,
            category: ModuleCategory::OnlinePresence,
        },
        ModuleDefinition {
            id: "online-transactions",
            code: "D2",
            name: "Online booking and payments",
            description: "Forms, booking flows, and payment steps completed before or during a visit.",
            estimated_minutes: 40,
            cost: 110,
            category: ModuleCategory::OnlinePresence,
        },
        ModuleDefinition {
            id: "communications",
            code: "D3",
            name: "Customer communications",
            description: "Email, phone, messaging, and printed material customers use to reach you.",
            estimated_minutes: 30,
            cost: 90,
            category: ModuleCategory::OnlinePresence,
        },
        ModuleDefinition {
            id: "approach-entry",
            code: "P1",
            name: "Approach and entry",
            description: "Parking, drop-off, the route to the door, and the entrance itself.",
            estimated_minutes: 50,
            cost: 140,
            category: ModuleCategory::GettingInAndAround,
        },
        ModuleDefinition {
            id: "interior-circulation",
            code: "P2",
            name: "Interior circulation",
            description: "Aisle widths, turning space, seating, and level changes inside the premises.",
            estimated_minutes: 45,
            cost: 130,
            category: ModuleCategory::GettingInAndAround,
        },
        ModuleDefinition {
            id: "wayfinding-signage",
            code: "P3",
            name: "Wayfinding and signage",
            description: "Signs, symbols, lighting, and layout cues that help customers orient themselves.",
            estimated_minutes: 35,
            cost: 100,
            category: ModuleCategory::GettingInAndAround,
        },
        ModuleDefinition {
            id: "facilities",
            code: "P4",
            name: "Toilets and facilities",
            description: "Accessible toilets, changing facilities, and other amenities offered on site.",
            estimated_minutes: 40,
            cost: 115,
            category: ModuleCategory::GettingInAndAround,
        },
        ModuleDefinition {
            id: "service-counter",
            code: "S1",
            name: "Counters and checkout",
            description: "Counter heights, queue design, card terminals, and self-service kiosks.",
            estimated_minutes: 30,
            cost: 95,
            category: ModuleCategory::ServiceAndSupport,
        },
        ModuleDefinition {
            id: "staff-awareness",
            code: "S2",
            name: "Staff awareness and training",
            description: "How staff recognize, greet, and assist customers with different access needs.",
            estimated_minutes: 55,
            cost: 150,
            category: ModuleCategory::ServiceAndSupport,
        },
        ModuleDefinition {
            id: "customer-support",
            code: "S3",
            name: "Assistance and support channels",
            description: "Requesting help, feedback routes, and complaint handling across channels.",
            estimated_minutes: 35,
            cost: 105,
            category: ModuleCategory::ServiceAndSupport,
        },
    ]
}
