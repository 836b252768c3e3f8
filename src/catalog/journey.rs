use serde::Serialize;

/// A discrete point in the customer journey that a business can mark as
/// applicable during discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Touchpoint {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub sub_touchpoints: Vec<SubTouchpoint>,
    /// Assessment modules triggered when this touchpoint is selected.
    pub module_mapping: Vec<&'static str>,
}

/// Finer-grained refinement of a touchpoint. Selecting one adds its label to
/// the parent's contribution; it never triggers modules on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubTouchpoint {
    pub id: &'static str,
    pub label: &'static str,
}

/// Ordered group of touchpoints. Used for grouping and labeling only; phases
/// play no part in scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyPhase {
    pub id: &'static str,
    pub label: &'static str,
    pub touchpoints: Vec<Touchpoint>,
}

pub(crate) fn standard_journey() -> Vec<JourneyPhase> {
    vec![
        JourneyPhase {
            id: "before-visit",
            label: "Before the visit",
            touchpoints: vec![
                Touchpoint {
                    id: "finding-online",
                    label: "Finding information online",
                    description: "Customers look up opening hours, prices, and access details on your website or elsewhere online.",
                    sub_touchpoints: vec![
                        SubTouchpoint {
                            id: "browsing-website",
                            label: "Browsing your website",
                        },
                        SubTouchpoint {
                            id: "social-media",
                            label: "Checking your social media",
                        },
                    ],
                    module_mapping: vec!["digital-content", "communications"],
                },
                Touchpoint {
                    id: "contacting-ahead",
                    label: "Calling or messaging ahead",
                    description: "Customers phone, email, or message to ask questions before deciding to visit.",
                    sub_touchpoints: vec![],
                    module_mapping: vec!["communications", "customer-support"],
                },
                Touchpoint {
                    id: "booking-ahead",
                    label: "Booking or reserving in advance",
                    description: "Customers book appointments, tables, or tickets before arriving.",
                    sub_touchpoints: vec![],
                    module_mapping: vec!["online-transactions", "communications"],
                },
            ],
        },
        JourneyPhase {
            id: "getting-there",
            label: "Getting there and in",
            touchpoints: vec![
                Touchpoint {
                    id: "travel-parking",
                    label: "Travelling and parking",
                    description: "Customers travel to your premises and park or are dropped off nearby.",
                    sub_touchpoints: vec![],
                    module_mapping: vec!["approach-entry"],
                },
                Touchpoint {
                    id: "getting-in",
                    label: "Entering the premises",
                    description: "Customers pass through your entrance to reach the service area.",
                    sub_touchpoints: vec![
                        SubTouchpoint {
                            id: "entrance-steps",
                            label: "Steps and ramps at the entrance",
                        },
                        SubTouchpoint {
                            id: "entrance-doors",
                            label: "Doors and doorways",
                        },
                    ],
                    module_mapping: vec!["approach-entry", "interior-circulation"],
                },
                Touchpoint {
                    id: "wayfinding",
                    label: "Finding your way around",
                    description: "Customers rely on signage and layout cues to locate what they came for.",
                    sub_touchpoints: vec![],
                    module_mapping: vec!["wayfinding-signage"],
                },
            ],
        },
        JourneyPhase {
            id: "during-visit",
            label: "During the visit",
            touchpoints: vec![
                Touchpoint {
                    id: "using-space",
                    label: "Moving through and using the space",
                    description: "Customers browse aisles, sit at tables, or move between service areas.",
                    sub_touchpoints: vec![],
                    module_mapping: vec!["interior-circulation", "wayfinding-signage"],
                },
                Touchpoint {
                    id: "amenities",
                    label: "Using toilets and amenities",
                    description: "Customers use toilets, changing facilities, or other amenities on site.",
                    sub_touchpoints: vec![],
                    module_mapping: vec!["facilities"],
                },
                Touchpoint {
                    id: "paying",
                    label: "Paying and checking out",
                    description: "Customers pay at a counter, kiosk, or terminal.",
                    sub_touchpoints: vec![],
                    module_mapping: vec!["service-counter"],
                },
            ],
        },
        JourneyPhase {
            id: "service-support",
            label: "Service and support",
            touchpoints: vec![
                Touchpoint {
                    id: "staff-interaction",
                    label: "Talking with staff",
                    description: "Customers ask staff for directions, advice, or service.",
                    sub_touchpoints: vec![],
                    module_mapping: vec!["staff-awareness"],
                },
                Touchpoint {
                    id: "requesting-assistance",
                    label: "Requesting assistance",
                    description: "Customers ask for specific help, such as carrying goods or reading a menu.",
                    sub_touchpoints: vec![],
                    module_mapping: vec!["customer-support", "staff-awareness"],
                },
                Touchpoint {
                    id: "giving-feedback",
                    label: "Giving feedback or making a complaint",
                    description: "Customers share what worked and what did not, during or after the visit.",
                    sub_touchpoints: vec![],
                    module_mapping: vec!["customer-support", "communications"],
                },
            ],
        },
    ]
}
