// Conservation Action Center - effort list, canned solutions, canned AI analysis

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{FetchRequest, Loadable};
use crate::{
    content::{analysis_for, solutions_for, AiAnalysis},
    error::{AppError, AppResult},
    models::{ConservationEffort, Solution},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionTab {
    #[default]
    Cases,
    Local,
}

impl ActionTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionTab::Cases => "cases",
            ActionTab::Local => "local",
        }
    }
}

impl FromStr for ActionTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cases" => Ok(ActionTab::Cases),
            "local" => Ok(ActionTab::Local),
            other => Err(format!("unknown tab: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActionCenterView {
    efforts: Loadable<Vec<ConservationEffort>>,
    tab: ActionTab,
    selected_effort: Option<i64>,
    /// Expanded solutions, in the order they were toggled on.
    selected_solutions: Vec<u32>,
    show_analysis: bool,
}

impl Default for ActionCenterView {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionCenterView {
    pub fn new() -> Self {
        Self {
            efforts: Loadable::Loading,
            tab: ActionTab::Cases,
            selected_effort: None,
            selected_solutions: Vec::new(),
            show_analysis: false,
        }
    }

    pub fn fetch_request(&self) -> FetchRequest {
        FetchRequest::ConservationEfforts
    }

    pub fn efforts(&self) -> &Loadable<Vec<ConservationEffort>> {
        &self.efforts
    }

    pub fn tab(&self) -> ActionTab {
        self.tab
    }

    pub fn show_analysis(&self) -> bool {
        self.show_analysis
    }

    pub fn begin_reload(&mut self) {
        self.efforts = Loadable::Loading;
    }

    pub fn apply_fetch(&mut self, result: AppResult<Vec<ConservationEffort>>) {
        self.efforts = Loadable::from_result(result, "Failed to fetch conservation efforts");
        let still_listed = self
            .efforts
            .ready()
            .zip(self.selected_effort)
            .is_some_and(|(efforts, id)| efforts.iter().any(|e| e.id == id));
        if !still_listed {
            self.clear_selection();
        }
    }

    pub fn selected_effort(&self) -> Option<&ConservationEffort> {
        let id = self.selected_effort?;
        self.efforts.ready()?.iter().find(|e| e.id == id)
    }

    /// Picks an effort; expanded solutions and the analysis panel start closed.
    pub fn select_effort(&mut self, effort_id: i64) -> AppResult<()> {
        let efforts = self
            .efforts
            .ready()
            .ok_or_else(|| AppError::BadRequest("conservation efforts are not loaded".into()))?;
        if !efforts.iter().any(|e| e.id == effort_id) {
            return Err(AppError::NotFound(format!(
                "conservation effort {} is not listed",
                effort_id
            )));
        }
        self.selected_effort = Some(effort_id);
        self.selected_solutions.clear();
        self.show_analysis = false;
        Ok(())
    }

    pub fn solutions(&self) -> Vec<Solution> {
        self.selected_effort()
            .map(|effort| solutions_for(&effort.title))
            .unwrap_or_default()
    }

    pub fn is_solution_selected(&self, solution_id: u32) -> bool {
        self.selected_solutions.contains(&solution_id)
    }

    pub fn toggle_solution(&mut self, solution_id: u32) -> AppResult<()> {
        if !self.solutions().iter().any(|s| s.id == solution_id) {
            return Err(AppError::NotFound(format!(
                "solution {} is not offered for the selected effort",
                solution_id
            )));
        }
        if let Some(index) = self.selected_solutions.iter().position(|&id| id == solution_id) {
            self.selected_solutions.remove(index);
        } else {
            self.selected_solutions.push(solution_id);
        }
        Ok(())
    }

    pub fn toggle_analysis(&mut self) -> AppResult<()> {
        if self.selected_effort().is_none() {
            return Err(AppError::BadRequest("select a conservation effort first".into()));
        }
        self.show_analysis = !self.show_analysis;
        Ok(())
    }

    /// The analysis panel's content, when it is open.
    pub fn analysis(&self) -> Option<AiAnalysis> {
        if !self.show_analysis {
            return None;
        }
        self.selected_effort().map(analysis_for)
    }

    pub fn switch_tab(&mut self, tab: ActionTab) {
        self.tab = tab;
    }

    fn clear_selection(&mut self) {
        self.selected_effort = None;
        self.selected_solutions.clear();
        self.show_analysis = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory_api::sample_efforts;

    fn loaded() -> ActionCenterView {
        let mut view = ActionCenterView::new();
        view.apply_fetch(Ok(sample_efforts()));
        view
    }

    #[test]
    fn test_select_effort_resets_solutions_and_analysis() {
        let mut view = loaded();
        view.select_effort(2).unwrap();
        view.toggle_solution(1).unwrap();
        view.toggle_solution(3).unwrap();
        view.toggle_analysis().unwrap();
        assert!(view.analysis().is_some());

        view.select_effort(1).unwrap();
        assert!(!view.is_solution_selected(1));
        assert!(view.analysis().is_none());
        assert_eq!(view.solutions()[0].name, "Marine Protected Areas Expansion");
    }

    #[test]
    fn test_toggle_solution_twice_collapses() {
        let mut view = loaded();
        view.select_effort(2).unwrap();
        view.toggle_solution(2).unwrap();
        assert!(view.is_solution_selected(2));
        view.toggle_solution(2).unwrap();
        assert!(!view.is_solution_selected(2));
        assert!(view.toggle_solution(7).is_err());
    }

    #[test]
    fn test_gestures_need_a_selection() {
        let mut view = loaded();
        assert!(view.solutions().is_empty());
        assert!(view.toggle_analysis().is_err());
        assert!(view.select_effort(99).is_err());
    }

    #[test]
    fn test_status_failure_message() {
        let mut view = ActionCenterView::new();
        view.apply_fetch(Err(AppError::UpstreamStatus {
            status: 503,
            message: String::new(),
        }));
        assert_eq!(view.efforts().error(), Some("Failed to fetch conservation efforts"));
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("local".parse::<ActionTab>(), Ok(ActionTab::Local));
        assert!("global".parse::<ActionTab>().is_err());
        assert_eq!(ActionTab::default(), ActionTab::Cases);
    }
}
