use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::Activity;

/// Registry mapping activity name to its record. Insertion order is the
/// seed order, so listings mirror the seeded dictionary.
pub type ActivityMap = IndexMap<String, Activity>;

/// Process-wide activity registry, shared across request tasks.
///
/// Cloning is cheap; all clones point at the same map. Writers take the
/// lock for the whole check-then-mutate step, so concurrent signups
/// against the same activity cannot lose updates.
#[derive(Clone)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityMap>>,
}

impl ActivityStore {
    /// Store pre-loaded with the fixed school activity set.
    pub fn seeded() -> Self {
        Self::with_activities(seed_activities())
    }

    pub fn with_activities(activities: ActivityMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, ActivityMap> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, ActivityMap> {
        self.inner.write().await
    }

    /// Owned copy of the full registry, for responses that outlive the guard.
    pub async fn snapshot(&self) -> ActivityMap {
        self.inner.read().await.clone()
    }
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|s| s.to_string()).collect(),
    }
}

fn seed_activities() -> ActivityMap {
    let mut activities = ActivityMap::new();
    activities.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &[
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "sarah@mergington.edu",
            ],
        ),
    );
    activities.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &[
                "emma@mergington.edu",
                "sophia@mergington.edu",
                "oliver@mergington.edu",
            ],
        ),
    );
    activities.insert(
        "Gym Class".to_string(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &[
                "john@mergington.edu",
                "olivia@mergington.edu",
                "lucy@mergington.edu",
            ],
        ),
    );
    activities.insert(
        "Soccer Team".to_string(),
        activity(
            "Join the school soccer team and compete in matches",
            "Wednesdays, 4:00 PM - 5:30 PM",
            22,
            &[
                "lucas@mergington.edu",
                "mia@mergington.edu",
                "ethan@mergington.edu",
            ],
        ),
    );
    activities.insert(
        "Basketball Club".to_string(),
        activity(
            "Practice basketball skills and play friendly games",
            "Mondays, 3:30 PM - 5:00 PM",
            15,
            &[
                "liam@mergington.edu",
                "ava@mergington.edu",
                "nathan@mergington.edu",
            ],
        ),
    );
    activities.insert(
        "Art Workshop".to_string(),
        activity(
            "Explore painting, drawing, and sculpture techniques",
            "Thursdays, 4:00 PM - 5:30 PM",
            18,
            &[
                "ella@mergington.edu",
                "noah@mergington.edu",
                "isabella@mergington.edu",
            ],
        ),
    );
    activities.insert(
        "Drama Club".to_string(),
        activity(
            "Act, direct, and produce school plays and performances",
            "Tuesdays, 3:30 PM - 5:00 PM",
            20,
            &[
                "jack@mergington.edu",
                "grace@mergington.edu",
                "alex@mergington.edu",
            ],
        ),
    );
    activities.insert(
        "Math Olympiad".to_string(),
        activity(
            "Prepare for math competitions and solve challenging problems",
            "Fridays, 4:00 PM - 5:30 PM",
            16,
            &[
                "henry@mergington.edu",
                "chloe@mergington.edu",
                "sam@mergington.edu",
            ],
        ),
    );
    activities.insert(
        "Science Club".to_string(),
        activity(
            "Conduct experiments and explore scientific concepts",
            "Wednesdays, 3:30 PM - 5:00 PM",
            20,
            &[
                "ben@mergington.edu",
                "zoe@mergington.edu",
                "lily@mergington.edu",
            ],
        ),
    );
    activities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_has_nine_activities_in_seed_order() {
        let store = ActivityStore::seeded();
        let activities = store.read().await;
        assert_eq!(activities.len(), 9);
        assert_eq!(
            activities.keys().next().map(String::as_str),
            Some("Chess Club")
        );
        assert_eq!(
            activities.keys().last().map(String::as_str),
            Some("Science Club")
        );
    }

    #[tokio::test]
    async fn seeded_rosters_start_with_three_participants() {
        let store = ActivityStore::seeded();
        let activities = store.read().await;
        for (name, activity) in activities.iter() {
            assert_eq!(activity.participants.len(), 3, "roster of {}", name);
            assert!(activity.max_participants > 0);
        }
    }

    #[tokio::test]
    async fn clones_share_the_same_registry() {
        let store = ActivityStore::seeded();
        let other = store.clone();
        store
            .write()
            .await
            .get_mut("Chess Club")
            .unwrap()
            .participants
            .push("extra@mergington.edu".to_string());

        let activities = other.read().await;
        assert_eq!(activities["Chess Club"].participants.len(), 4);
    }
}
