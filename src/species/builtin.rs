//! Built-in species table and common activity pool
//!
//! Entry order is significant: names are matched against keys top to bottom
//! and the first hit wins. "Default" must stay last.

use super::{ActivityTemplate, BehaviorProfile, Terrain};

fn t(kind: &str, description: &str, min: u32, max: u32, energy: i32) -> ActivityTemplate {
    ActivityTemplate::new(kind, description, min, max, energy)
}

fn profile(
    key: &str,
    max_movement_radius: f64,
    terrain: Terrain,
    base_energy: i32,
    base_social: i32,
    preferred_activities: Vec<ActivityTemplate>,
) -> BehaviorProfile {
    BehaviorProfile {
        key: key.to_string(),
        max_movement_radius,
        terrain,
        base_energy,
        base_social,
        preferred_activities,
    }
}

pub(super) fn profiles() -> Vec<BehaviorProfile> {
    vec![
        profile("Baboon", 2.0, Terrain::Savanna, 80, 90, vec![
            t("Grooming", "Spent time grooming another baboon's fur", 10, 30, 5),
            t("Socializing", "Had an animated conversation with the troop", 15, 25, 0),
            t("Foraging", "Dug up some tasty roots and tubers", 10, 25, 15),
        ]),
        profile("Capuchin", 1.8, Terrain::Rainforest, 85, 80, vec![
            t("Tool Use", "Used a stick to extract insects from tree bark", 8, 20, 10),
            t("Fruit Foraging", "Found and cracked open some nutritious nuts", 10, 25, 15),
            t(
                "Social Learning",
                "Watched and learned new techniques from other capuchins",
                5,
                15,
                0,
            ),
        ]),
        profile("Blue", 1.6, Terrain::Forest, 75, 85, vec![
            t("Canopy Foraging", "Searched for fruits high in the forest canopy", 12, 30, 12),
            t("Territory Patrol", "Patrolled the group's territory boundaries", 20, 40, -8),
            t("Group Bonding", "Engaged in social bonding with troop members", 10, 25, 5),
        ]),
        profile("Squirrel", 1.4, Terrain::Rainforest, 90, 95, vec![
            t("Acrobatic Leaping", "Performed impressive leaps between branches", 2, 8, -5),
            t("Insect Hunting", "Caught and ate some protein-rich insects", 5, 15, 8),
            t(
                "Playful Wrestling",
                "Engaged in playful wrestling with other squirrel monkeys",
                8,
                20,
                0,
            ),
        ]),
        profile("Golden Lion Tamarin", 1.3, Terrain::AtlanticForest, 80, 90, vec![
            t("Mane Grooming", "Carefully groomed their magnificent golden mane", 10, 25, 5),
            t(
                "Tree Hole Foraging",
                "Searched tree holes for hidden insects and small animals",
                8,
                20,
                12,
            ),
            t("Family Bonding", "Spent quality time with family members", 15, 35, 8),
        ]),
        profile("Howler", 1.5, Terrain::Forest, 70, 75, vec![
            t("Howling", "Let out a mighty roar to communicate with distant howlers", 2, 5, -5),
            t("Leaf Eating", "Munched on some fresh, tender leaves", 15, 35, 12),
            t("Territory Marking", "Marked territory with scent to ward off intruders", 3, 8, -3),
        ]),
        profile("Japanese Macaque", 1.8, Terrain::Mountain, 85, 85, vec![
            t("Hot Spring Bath", "Relaxed in a natural hot spring", 20, 45, 20),
            t("Snow Play", "Made and threw snowballs for fun", 10, 20, -8),
            t("Potato Washing", "Carefully washed sweet potatoes in a stream", 5, 12, 8),
        ]),
        profile("Mandrill", 2.2, Terrain::Rainforest, 85, 95, vec![
            t(
                "Colorful Display",
                "Showed off their vibrant facial colors to assert dominance",
                3,
                10,
                -3,
            ),
            t("Ground Foraging", "Searched the forest floor for fruits and roots", 15, 30, 15),
            t("Troop Leadership", "Led the troop to new foraging areas", 20, 45, -10),
        ]),
        profile("Proboscis", 1.2, Terrain::Mangrove, 75, 70, vec![
            t("Swimming", "Took a refreshing swim across a river", 8, 20, -5),
            t("Nose Flexing", "Showed off impressive nose size to potential mates", 3, 8, -2),
            t("Mangrove Foraging", "Found delicious mangrove fruits and seeds", 12, 25, 14),
        ]),
        profile("Red-shanked douc", 1.7, Terrain::Forest, 78, 82, vec![
            t(
                "Colorful Posing",
                "Displayed their beautiful colorful fur in the sunlight",
                5,
                15,
                0,
            ),
            t("Leaf Selection", "Carefully selected the most nutritious young leaves", 10, 25, 10),
            t("Arboreal Movement", "Gracefully moved through the forest canopy", 8, 20, -5),
        ]),
        profile("Sebastian", 0.5, Terrain::Urban, 95, 100, vec![
            t(
                "Tech Shopping",
                "Browsed the latest Android devices at the local electronics store",
                30,
                60,
                10,
            ),
            t("Coffee Break", "Enjoyed a latte at a trendy Seattle coffee shop", 15, 30, 15),
            t("Social Media", "Posted updates and photos on @MotzMonkeys", 10, 20, 5),
        ]),
        profile("Henry", 0.8, Terrain::DesertUrban, 88, 92, vec![
            t("iOS Testing", "Tested the latest iPhone features and apps", 25, 45, 8),
            t(
                "Desert Exploration",
                "Explored the beautiful Arizona desert landscapes",
                40,
                80,
                -10,
            ),
            t("Travel Planning", "Planned the next adventure with Heather", 20, 40, 5),
        ]),
        profile("Mooch", 0.6, Terrain::Urban, 90, 98, vec![
            t(
                "iPhone Photography",
                "Captured stunning photos with the latest iPhone camera",
                15,
                35,
                5,
            ),
            t(
                "Waterfront Stroll",
                "Enjoyed a peaceful walk along the Seattle waterfront",
                30,
                60,
                10,
            ),
            t(
                "Adventure Blogging",
                "Documented travel adventures for @MotzMonkeys followers",
                20,
                40,
                0,
            ),
        ]),
        profile("Default", 1.5, Terrain::Forest, 75, 75, vec![
            t(
                "Banana Finding",
                "Discovered a perfectly ripe banana and enjoyed every bite",
                3,
                8,
                12,
            ),
            t("Swinging", "Swung gracefully from vine to vine", 5, 15, -5),
            t("Mutual Grooming", "Groomed a friend and got groomed in return", 10, 25, 8),
        ]),
    ]
}

/// Species-agnostic templates any animal can draw from
pub(super) fn common_activities() -> Vec<ActivityTemplate> {
    vec![
        t("Foraging", "Found some delicious fruits and ate them", 5, 20, 10),
        t("Resting", "Took a well-deserved nap under a tree", 15, 45, 15),
        t("Exploring", "Investigated an interesting rock formation", 5, 15, -5),
        t("Drinking", "Found a water source and had a refreshing drink", 2, 8, 5),
        t("Climbing", "Climbed a tall tree to get a better view", 5, 15, -10),
        t("Sunbathing", "Relaxed in a warm sunny spot", 10, 30, 8),
        t("Playing", "Engaged in playful antics with nearby objects", 5, 20, -3),
        t("Grooming", "Spent time cleaning and grooming themselves", 8, 25, 3),
        t("Watching", "Sat quietly observing the surrounding environment", 3, 15, 2),
        t("Stretching", "Did some stretching exercises after sitting for a while", 2, 8, 5),
        t("Snacking", "Found and munched on some seeds or small insects", 3, 12, 7),
        t("Shelter Seeking", "Found a cozy spot for protection from the elements", 5, 20, 4),
        t("Scent Investigation", "Investigated interesting scents in the area", 2, 10, -2),
        t("Branch Swinging", "Swung energetically from branch to branch", 3, 12, -8),
        t("Ground Exploration", "Searched the ground for interesting items or food", 8, 25, -5),
    ]
}
