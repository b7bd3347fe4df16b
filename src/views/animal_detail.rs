// Animal Detail - one profile plus the simulated prompt-engineering exercise

use super::{FetchRequest, Loadable};
use crate::{
    content::prompts::{simulated_response, PromptTechnique},
    error::{AppError, AppResult},
    models::Animal,
};

/// State of the research-assistant sidebar. Responses are canned text, never inference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptExercise {
    technique: Option<PromptTechnique>,
    prompt: String,
    response: Option<String>,
    verified: bool,
}

impl PromptExercise {
    pub fn technique(&self) -> Option<PromptTechnique> {
        self.technique
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn choose(&mut self, technique: PromptTechnique) {
        self.technique = Some(technique);
    }

    /// Submits `prompt` and records the canned response. Blank prompts are refused.
    pub fn ask(&mut self, animal_name: &str, prompt: &str) -> AppResult<&str> {
        if self.technique.is_none() {
            return Err(AppError::BadRequest("choose a prompt technique first".into()));
        }
        if prompt.trim().is_empty() {
            return Err(AppError::BadRequest("prompt must not be blank".into()));
        }

        self.prompt = prompt.to_string();
        self.verified = false;
        Ok(self.response.insert(simulated_response(animal_name)).as_str())
    }

    pub fn verify(&mut self) -> AppResult<()> {
        if self.response.is_none() {
            return Err(AppError::BadRequest("there is no response to verify yet".into()));
        }
        self.verified = true;
        Ok(())
    }

    /// "Try Different Technique": back to the technique list with everything cleared.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone)]
pub struct AnimalDetailView {
    animal_id: i64,
    animal: Loadable<Animal>,
    exercise: PromptExercise,
}

impl AnimalDetailView {
    pub fn new(animal_id: i64) -> Self {
        Self {
            animal_id,
            animal: Loadable::Loading,
            exercise: PromptExercise::default(),
        }
    }

    pub fn animal_id(&self) -> i64 {
        self.animal_id
    }

    pub fn fetch_request(&self) -> FetchRequest {
        FetchRequest::Animal(self.animal_id)
    }

    pub fn animal(&self) -> &Loadable<Animal> {
        &self.animal
    }

    pub fn exercise(&self) -> &PromptExercise {
        &self.exercise
    }

    pub fn begin_reload(&mut self) {
        self.animal = Loadable::Loading;
    }

    pub fn apply_fetch(&mut self, result: AppResult<Animal>) {
        self.animal = Loadable::from_result(result, "Animal not found");
    }

    pub fn choose_technique(&mut self, technique: PromptTechnique) -> AppResult<()> {
        self.loaded()?;
        self.exercise.choose(technique);
        Ok(())
    }

    pub fn ask(&mut self, prompt: &str) -> AppResult<()> {
        let name = self.loaded()?.name.clone();
        self.exercise.ask(&name, prompt)?;
        Ok(())
    }

    pub fn verify(&mut self) -> AppResult<()> {
        self.loaded()?;
        self.exercise.verify()
    }

    pub fn reset_exercise(&mut self) {
        self.exercise.reset();
    }

    /// Facts shown by the fact check, once verified.
    pub fn fact_check(&self) -> Option<&[String]> {
        if !self.exercise.is_verified() {
            return None;
        }
        self.animal.ready().map(Animal::verification_facts)
    }

    fn loaded(&self) -> AppResult<&Animal> {
        self.animal
            .ready()
            .ok_or_else(|| AppError::BadRequest("animal is not loaded".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory_api::sample_animals;

    fn loaded_wolf() -> AnimalDetailView {
        let mut view = AnimalDetailView::new(2);
        view.apply_fetch(Ok(sample_animals()[1].clone()));
        view
    }

    #[test]
    fn test_ask_requires_technique_and_text() {
        let mut view = loaded_wolf();
        assert!(view.ask("hello").is_err());

        view.choose_technique(PromptTechnique::Role).unwrap();
        assert!(matches!(view.ask("   \n"), Err(AppError::BadRequest(_))));
        assert_eq!(view.exercise().response(), None);

        view.ask("Tell me about wolves").unwrap();
        assert_eq!(
            view.exercise().response(),
            Some("This is a simulated AI response about Gray Wolf. In production, this would call an actual AI API with your prompt.")
        );
    }

    #[test]
    fn test_verify_shows_first_two_facts_and_reask_hides_them() {
        let mut view = loaded_wolf();
        view.choose_technique(PromptTechnique::FewShot).unwrap();
        assert!(view.verify().is_err());

        view.ask("Explain adaptations").unwrap();
        view.verify().unwrap();
        let facts = view.fact_check().unwrap();
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0], "Live and hunt in packs with complex social structures");

        view.ask("Again").unwrap();
        assert!(view.fact_check().is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut view = loaded_wolf();
        view.choose_technique(PromptTechnique::Role).unwrap();
        view.ask("q").unwrap();
        view.verify().unwrap();
        view.reset_exercise();
        assert_eq!(view.exercise(), &PromptExercise::default());
    }

    #[test]
    fn test_failed_fetch_blocks_exercise() {
        let mut view = AnimalDetailView::new(99);
        view.apply_fetch(Err(AppError::UpstreamStatus {
            status: 500,
            message: "boom".into(),
        }));
        assert_eq!(view.animal().error(), Some("Animal not found"));
        assert!(view.choose_technique(PromptTechnique::Role).is_err());
    }
}
