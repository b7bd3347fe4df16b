// In-memory AnimalDex API - a fixed catalog served without a network
// Used by the route tests and anywhere a deterministic catalog is needed

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::api_client::AnimalDexApi;
use crate::{
    error::{AppError, AppResult},
    models::{Animal, AnimalSummary, ConservationEffort, ConservationStatus, HabitatSummary},
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryApi {
    animals: Vec<Animal>,
    habitats: Vec<HabitatSummary>,
    efforts: Vec<ConservationEffort>,
    failure: Arc<Mutex<Option<AppError>>>,
    requests: Arc<AtomicUsize>,
}

impl InMemoryApi {
    pub fn new(
        animals: Vec<Animal>,
        habitats: Vec<HabitatSummary>,
        efforts: Vec<ConservationEffort>,
    ) -> Self {
        Self {
            animals,
            habitats,
            efforts,
            ..Default::default()
        }
    }

    /// A small catalog modelled on the AnimalDex seed data.
    pub fn sample() -> Self {
        Self::new(sample_animals(), sample_habitats(), sample_efforts())
    }

    /// Every following request fails with `error` until cleared with `None`.
    pub fn set_failure(&self, error: Option<AppError>) {
        let mut failure = self.failure.lock().unwrap_or_else(|e| e.into_inner());
        *failure = error;
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn begin_request(&self) -> AppResult<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let failure = self.failure.lock().unwrap_or_else(|e| e.into_inner());
        match failure.as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AnimalDexApi for InMemoryApi {
    async fn list_animals(&self) -> AppResult<Vec<AnimalSummary>> {
        self.begin_request()?;
        Ok(self.animals.iter().map(Animal::summary).collect())
    }

    async fn get_animal(&self, id: i64) -> AppResult<Animal> {
        self.begin_request()?;
        self.animals
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("/api/animals/{} was not found", id)))
    }

    async fn list_habitats(&self) -> AppResult<Vec<HabitatSummary>> {
        self.begin_request()?;
        Ok(self.habitats.clone())
    }

    async fn list_conservation_efforts(&self) -> AppResult<Vec<ConservationEffort>> {
        self.begin_request()?;
        Ok(self.efforts.clone())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn animal(
    id: i64,
    name: &str,
    scientific_name: &str,
    status: ConservationStatus,
    diet: &str,
    fun_facts: &[&str],
    image_urls: &[&str],
) -> Animal {
    Animal {
        id,
        name: name.to_string(),
        scientific_name: scientific_name.to_string(),
        common_names: vec![name.to_string()],
        conservation_status: Some(status),
        description: Some(format!("{} profile from the AnimalDex catalog.", name)),
        fun_facts: strings(fun_facts),
        diet: Some(diet.to_string()),
        lifespan: Some("varies".to_string()),
        image_urls: strings(image_urls),
        video_urls: Vec::new(),
        audio_urls: Vec::new(),
        classification: Default::default(),
        size_info: Default::default(),
    }
}

pub fn sample_animals() -> Vec<Animal> {
    vec![
        animal(
            1,
            "Arctic Fox",
            "Vulpes lagopus",
            ConservationStatus::LeastConcern,
            "Omnivore",
            &[
                "Arctic foxes change coat color seasonally - white in winter, brown in summer",
                "They have the warmest fur of any mammal, able to survive -70°C",
                "Can hear prey moving under snow from several meters away",
            ],
            &[
                "https://images.unsplash.com/photo-1470093851219-69951fcbb533",
                "https://images.unsplash.com/photo-1712322424999-96d2f4d84df0",
            ],
        ),
        animal(
            2,
            "Gray Wolf",
            "Canis lupus",
            ConservationStatus::LeastConcern,
            "Carnivore",
            &[
                "Live and hunt in packs with complex social structures",
                "Can travel up to 30 miles in a day",
                "Reintroduction to Yellowstone restored ecosystem balance",
            ],
            &["https://images.unsplash.com/photo-1546638285-f17602bf4bdc"],
        ),
        animal(
            3,
            "African Elephant",
            "Loxodonta africana",
            ConservationStatus::Endangered,
            "Herbivore",
            &["Can communicate using infrasound below human hearing range"],
            &["https://images.unsplash.com/photo-1564760055775-d63b17a55c44"],
        ),
    ]
}

pub fn sample_habitats() -> Vec<HabitatSummary> {
    [
        ("Arctic Tundra", "Cold, treeless region with permafrost", "Polar"),
        ("Tropical Rainforest", "Dense, warm forests with high rainfall", "Tropical"),
        ("Savanna", "Grasslands with scattered trees", "Tropical"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, description, climate))| HabitatSummary {
        id: i as i64 + 1,
        name: name.to_string(),
        description: Some(description.to_string()),
        climate: Some(climate.to_string()),
        key_characteristics: Vec::new(),
        image_url: None,
    })
    .collect()
}

pub fn sample_efforts() -> Vec<ConservationEffort> {
    vec![
        ConservationEffort {
            id: 1,
            title: "Great Barrier Reef Restoration".to_string(),
            description: Some("Coral farming and transplantation to restore damaged reef areas".to_string()),
            organization_name: Some("Australian Institute of Marine Science".to_string()),
            website_url: Some("https://www.aims.gov.au".to_string()),
            location: Some("Australia".to_string()),
            conservation_problem: Some(
                "Rising ocean temperatures causing mass coral bleaching events".to_string(),
            ),
            current_status: Some("Active".to_string()),
            petition_url: Some("https://www.change.org/reef-protection".to_string()),
            volunteer_url: None,
            donation_url: None,
            image_url: None,
        },
        ConservationEffort {
            id: 2,
            title: "Yellowstone Wolf Reintroduction".to_string(),
            description: Some(
                "Successful reintroduction of gray wolves to restore ecosystem balance".to_string(),
            ),
            organization_name: Some("Yellowstone Wolf Project".to_string()),
            website_url: Some("https://www.nps.gov/yell/learn/nature/wolf-restoration.htm".to_string()),
            location: Some("Yellowstone National Park, USA".to_string()),
            conservation_problem: Some(
                "Loss of apex predator led to ecosystem imbalance and overgrazing".to_string(),
            ),
            current_status: Some("Success - Completed".to_string()),
            petition_url: None,
            volunteer_url: None,
            donation_url: None,
            image_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failure_injection_and_recovery() {
        let api = InMemoryApi::sample();
        api.set_failure(Some(AppError::Transport("connection refused".into())));
        assert!(api.list_animals().await.is_err());

        api.set_failure(None);
        assert_eq!(api.list_animals().await.unwrap().len(), 3);
        assert_eq!(api.request_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_animal_is_not_found() {
        let api = InMemoryApi::sample();
        assert!(matches!(api.get_animal(99).await, Err(AppError::NotFound(_))));
        assert_eq!(api.get_animal(2).await.unwrap().name, "Gray Wolf");
    }
}
