// Page controllers - one owned state struct per page view
// Each view is mutated only through its own operations; rendering reads it

pub mod action_center;
pub mod animal_detail;
pub mod discovery;
pub mod ecosystem;

use futures::future::try_join;
use tracing::warn;

use crate::{
    error::{AppError, AppResult},
    infrastructure::api_client::AnimalDexApi,
    models::{Animal, AnimalSummary, ConservationEffort, HabitatSummary},
};

pub use action_center::{ActionCenterView, ActionTab};
pub use animal_detail::{AnimalDetailView, PromptExercise};
pub use discovery::DiscoveryView;
pub use ecosystem::{
    CanvasBounds, ClickOutcome, EcosystemBuilderView, EcosystemCanvas, EcosystemData, Interaction,
};

/// Fetch state of a page's remote data.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    /// User-visible message.
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    /// Non-success statuses show `status_message`; transport and decode failures show their own text.
    pub fn from_result(result: AppResult<T>, status_message: &str) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(err) => {
                warn!("Fetch failed: {}", err);
                Loadable::Failed(failure_message(&err, status_message))
            }
        }
    }
}

pub fn failure_message(err: &AppError, status_message: &str) -> String {
    match err {
        AppError::UpstreamStatus { .. } | AppError::NotFound(_) => status_message.to_string(),
        AppError::Transport(message) | AppError::Decode(message) => message.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Detail,
    Ecosystem,
    ActionCenter,
}

impl PageKind {
    pub fn name(&self) -> &'static str {
        match self {
            PageKind::Detail => "animal detail",
            PageKind::Ecosystem => "ecosystem builder",
            PageKind::ActionCenter => "conservation action center",
        }
    }
}

/// What a view needs from the API to (re)load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRequest {
    Animal(i64),
    AnimalsAndHabitats,
    ConservationEfforts,
}

pub enum FetchOutcome {
    Animal(AppResult<Animal>),
    AnimalsAndHabitats(AppResult<(Vec<AnimalSummary>, Vec<HabitatSummary>)>),
    ConservationEfforts(AppResult<Vec<ConservationEffort>>),
}

impl FetchRequest {
    pub async fn run(self, api: &dyn AnimalDexApi) -> FetchOutcome {
        match self {
            FetchRequest::Animal(id) => FetchOutcome::Animal(api.get_animal(id).await),
            FetchRequest::AnimalsAndHabitats => FetchOutcome::AnimalsAndHabitats(
                try_join(api.list_animals(), api.list_habitats()).await,
            ),
            FetchRequest::ConservationEfforts => {
                FetchOutcome::ConservationEfforts(api.list_conservation_efforts().await)
            }
        }
    }
}

/// A live page view held in the session store.
#[derive(Debug, Clone)]
pub enum PageView {
    Detail(AnimalDetailView),
    Ecosystem(EcosystemBuilderView),
    ActionCenter(ActionCenterView),
}

impl PageView {
    pub fn kind(&self) -> PageKind {
        match self {
            PageView::Detail(_) => PageKind::Detail,
            PageView::Ecosystem(_) => PageKind::Ecosystem,
            PageView::ActionCenter(_) => PageKind::ActionCenter,
        }
    }

    pub fn fetch_request(&self) -> FetchRequest {
        match self {
            PageView::Detail(view) => FetchRequest::Animal(view.animal_id()),
            PageView::Ecosystem(_) => FetchRequest::AnimalsAndHabitats,
            PageView::ActionCenter(_) => FetchRequest::ConservationEfforts,
        }
    }

    /// Puts the view back into its loading state ahead of a manual retry.
    pub fn begin_reload(&mut self) {
        match self {
            PageView::Detail(view) => view.begin_reload(),
            PageView::Ecosystem(view) => view.begin_reload(),
            PageView::ActionCenter(view) => view.begin_reload(),
        }
    }

    pub fn apply_fetch(&mut self, outcome: FetchOutcome) -> AppResult<()> {
        match (self, outcome) {
            (PageView::Detail(view), FetchOutcome::Animal(result)) => view.apply_fetch(result),
            (PageView::Ecosystem(view), FetchOutcome::AnimalsAndHabitats(result)) => {
                view.apply_fetch(result)
            }
            (PageView::ActionCenter(view), FetchOutcome::ConservationEfforts(result)) => {
                view.apply_fetch(result)
            }
            (view, _) => {
                return Err(AppError::Internal(format!(
                    "fetch result does not belong to a {} view",
                    view.kind().name()
                )))
            }
        }
        Ok(())
    }

    pub fn as_detail_mut(&mut self) -> AppResult<&mut AnimalDetailView> {
        match self {
            PageView::Detail(view) => Ok(view),
            other => Err(wrong_page(other.kind(), PageKind::Detail)),
        }
    }

    pub fn as_ecosystem_mut(&mut self) -> AppResult<&mut EcosystemBuilderView> {
        match self {
            PageView::Ecosystem(view) => Ok(view),
            other => Err(wrong_page(other.kind(), PageKind::Ecosystem)),
        }
    }

    pub fn as_action_center_mut(&mut self) -> AppResult<&mut ActionCenterView> {
        match self {
            PageView::ActionCenter(view) => Ok(view),
            other => Err(wrong_page(other.kind(), PageKind::ActionCenter)),
        }
    }
}

fn wrong_page(actual: PageKind, wanted: PageKind) -> AppError {
    AppError::BadRequest(format!(
        "this is a {} view, not a {} view",
        actual.name(),
        wanted.name()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_by_taxonomy() {
        let status = AppError::UpstreamStatus {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(failure_message(&status, "Failed to fetch"), "Failed to fetch");
        assert_eq!(
            failure_message(&AppError::Transport("connection refused".into()), "x"),
            "connection refused"
        );
    }

    #[test]
    fn test_gesture_on_wrong_page_is_bad_request() {
        let mut view = PageView::Detail(AnimalDetailView::new(1));
        assert!(matches!(view.as_ecosystem_mut(), Err(AppError::BadRequest(_))));
        assert!(view.as_detail_mut().is_ok());
        assert_eq!(view.fetch_request(), FetchRequest::Animal(1));
    }

    #[test]
    fn test_mismatched_fetch_outcome_is_rejected() {
        let mut view = PageView::ActionCenter(ActionCenterView::new());
        let outcome = FetchOutcome::Animal(Err(AppError::NotFound("x".into())));
        assert!(view.apply_fetch(outcome).is_err());
    }
}
