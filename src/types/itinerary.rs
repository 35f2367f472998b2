use serde::{Deserialize, Serialize};

/// Category of a single itinerary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Travel,
    Meal,
    Activity,
    Accommodation,
    Rest,
}

/// One timeline entry in a generated itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub id: String,
    /// Wall-clock start, "HH:MM"
    pub time: String,
    pub kind: ItemKind,
    pub title: String,
    pub location: String,
    pub description: String,
    /// Free-text duration as shown to the user, e.g. "4 hours"
    pub duration: String,
    pub cost: u64,
    /// Star rating in [0, 5] where available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

/// The artifact produced by a successful planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub origin: String,
    pub destination: String,
    pub items: Vec<ItineraryItem>,
}

impl Itinerary {
    /// Total trip cost: sum of item costs
    pub fn total_cost(&self) -> u64 {
        self.items.iter().map(|item| item.cost).sum()
    }

    /// The canned one-day sample itinerary, personalized with the trip endpoints
    pub fn sample_day(origin: &str, destination: &str) -> Self {
        let items = vec![
            ItineraryItem {
                id: "1".to_string(),
                time: "08:00".to_string(),
                kind: ItemKind::Travel,
                title: format!("Departure from {origin}"),
                location: origin.to_string(),
                description: "Start your journey with a scenic drive through the countryside"
                    .to_string(),
                duration: "4 hours".to_string(),
                cost: 50,
                rating: Some(4.5),
            },
            ItineraryItem {
                id: "2".to_string(),
                time: "10:30".to_string(),
                kind: ItemKind::Rest,
                title: "Coffee Break".to_string(),
                location: "Highway Cafe, Gurgaon".to_string(),
                description: "Refreshing break with local coffee and snacks".to_string(),
                duration: "30 mins".to_string(),
                cost: 15,
                rating: Some(4.2),
            },
            ItineraryItem {
                id: "3".to_string(),
                time: "12:00".to_string(),
                kind: ItemKind::Meal,
                title: "Lunch at Local Restaurant".to_string(),
                location: "Roadside Dhaba, Haryana".to_string(),
                description: "Authentic North Indian cuisine with regional specialties".to_string(),
                duration: "1 hour".to_string(),
                cost: 25,
                rating: Some(4.7),
            },
            ItineraryItem {
                id: "4".to_string(),
                time: "15:00".to_string(),
                kind: ItemKind::Activity,
                title: "Scenic Viewpoint".to_string(),
                location: "Mountain View Point".to_string(),
                description: "Breathtaking panoramic views and photo opportunities".to_string(),
                duration: "45 mins".to_string(),
                cost: 0,
                rating: Some(4.9),
            },
            ItineraryItem {
                id: "5".to_string(),
                time: "18:00".to_string(),
                kind: ItemKind::Accommodation,
                title: "Check-in Hotel".to_string(),
                location: format!("Mountain Resort, {destination}"),
                description: "Comfortable accommodation with mountain views".to_string(),
                duration: "Overnight".to_string(),
                cost: 120,
                rating: Some(4.6),
            },
        ];

        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            items,
        }
    }
}
