use crate::dashboard::DashboardEvent;
use crate::errors::AppError;
use crate::models::{DashboardView, GoalDraft, Metric, Weekday};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use serde::Deserialize;

/// Goal form as posted by the page. Disabled inputs are not sent at all.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GoalForm {
    pub title: String,
    pub description: String,
    pub deadline_date: String,
    pub deadline_time: String,
}

impl GoalForm {
    fn into_draft(self) -> GoalDraft {
        let date = self.deadline_date.trim();
        let time = self.deadline_time.trim();
        let deadline = match (date.is_empty(), time.is_empty()) {
            (true, _) => String::new(),
            (false, true) => date.to_string(),
            (false, false) => format!("{date} {time}"),
        };

        GoalDraft {
            title: self.title,
            description: self.description,
            deadline,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckInForm {
    pub sleep: f64,
    pub water: f64,
    pub screen_time: f64,
}

#[derive(Debug, Deserialize)]
pub struct MetricForm {
    pub metric: String,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let dashboard = state.dashboard.lock().await;
    Html(render_index(&dashboard.view()))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.view())
}

pub async fn post_event(
    State(state): State<AppState>,
    Json(event): Json<DashboardEvent>,
) -> Json<DashboardView> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.apply(event);
    Json(dashboard.view())
}

pub async fn select_day(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Redirect, AppError> {
    let day: Weekday = day.parse()?;
    dispatch(&state, [DashboardEvent::SelectDay { day }]).await
}

pub async fn submit_goal(
    State(state): State<AppState>,
    Form(form): Form<GoalForm>,
) -> Result<Redirect, AppError> {
    dispatch(&state, [DashboardEvent::SubmitGoal(form.into_draft())]).await
}

pub async fn complete_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    dispatch(&state, [DashboardEvent::CompleteGoal { id }]).await
}

pub async fn edit_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    dispatch(&state, [DashboardEvent::BeginEdit { id }]).await
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    dispatch(&state, [DashboardEvent::DeleteGoal { id }]).await
}

pub async fn open_check_in(State(state): State<AppState>) -> Result<Redirect, AppError> {
    dispatch(&state, [DashboardEvent::OpenCheckIn]).await
}

pub async fn cancel_check_in(State(state): State<AppState>) -> Result<Redirect, AppError> {
    dispatch(&state, [DashboardEvent::CancelCheckIn]).await
}

pub async fn save_check_in(
    State(state): State<AppState>,
    Form(form): Form<CheckInForm>,
) -> Result<Redirect, AppError> {
    dispatch(
        &state,
        [
            DashboardEvent::SetSleep { value: form.sleep },
            DashboardEvent::SetWater { value: form.water },
            DashboardEvent::SetScreenTime {
                value: form.screen_time,
            },
            DashboardEvent::SaveCheckIn,
        ],
    )
    .await
}

pub async fn select_metric(
    State(state): State<AppState>,
    Form(form): Form<MetricForm>,
) -> Result<Redirect, AppError> {
    let metric: Metric = form.metric.parse()?;
    dispatch(&state, [DashboardEvent::SelectMetric { metric }]).await
}

async fn dispatch<I>(state: &AppState, events: I) -> Result<Redirect, AppError>
where
    I: IntoIterator<Item = DashboardEvent>,
{
    let mut dashboard = state.dashboard.lock().await;
    for event in events {
        dashboard.apply(event);
    }
    Ok(Redirect::to("/"))
}
