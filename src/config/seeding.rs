use anyhow::Result;
use std::sync::Arc;

use crate::models::CreateGym;
use crate::repositories::GymsRepository;
use crate::use_cases::CreateGymUseCase;

pub struct DatabaseSeeder {
    gyms: Arc<dyn GymsRepository>,
}

impl DatabaseSeeder {
    pub fn new(gyms: Arc<dyn GymsRepository>) -> Self {
        Self { gyms }
    }

    pub async fn seed_all(&self) -> Result<()> {
        tracing::info!("Starting database seeding...");

        let created = self.seed_gyms().await?;

        tracing::info!(created, "Database seeding completed!");
        Ok(())
    }

    /// Inserts the demo gyms that are not present yet. Returns how many were created.
    pub async fn seed_gyms(&self) -> Result<usize> {
        let create_gym = CreateGymUseCase::new(self.gyms.clone());
        let mut created = 0;

        for gym in demo_gyms() {
            if self.title_exists(&gym.title).await? {
                continue;
            }

            let response = create_gym.execute(gym).await?;
            tracing::info!(gym_id = %response.gym.id, title = %response.gym.title, "Created demo gym");
            created += 1;
        }

        Ok(created)
    }

    /// Walks every search page, since other gyms may share the title as a substring.
    async fn title_exists(&self, title: &str) -> Result<bool> {
        let mut page = 1;

        loop {
            let gyms = self.gyms.search_many(title, page).await?;
            if gyms.is_empty() {
                return Ok(false);
            }
            if gyms.iter().any(|g| g.title == title) {
                return Ok(true);
            }
            page += 1;
        }
    }
}

fn demo_gyms() -> Vec<CreateGym> {
    vec![
        CreateGym {
            title: "JavaScript Gym".to_string(),
            description: Some("Open 24/7".to_string()),
            phone: Some("+55 11 99999-0001".to_string()),
            latitude: -23.6158976,
            longitude: -46.6354176,
        },
        CreateGym {
            title: "TypeScript Gym".to_string(),
            description: None,
            phone: None,
            latitude: -23.466193,
            longitude: -46.6354176,
        },
        CreateGym {
            title: "Rust Gym".to_string(),
            description: Some("Free weights and climbing wall".to_string()),
            phone: None,
            latitude: 28.4811732,
            longitude: -81.3426652,
        },
    ]
}
