//! Employee pages: list, add, edit, delete

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::{parse_id, EmployeeIdPath};
use crate::models::{EmployeeFields, EmployeeForm, ValidationError};
use crate::state::AppState;
use crate::views;

/// Delete form body
#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub emp_id: Option<String>,
}

/// GET / - list every employee
async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let employees = state.store().list().await?;
    Ok(Html(views::index(&employees)))
}

/// POST /add - create an employee, back to the list
async fn add(
    State(state): State<AppState>,
    form: Result<Form<EmployeeForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let Form(form) = form?;
    let fields = EmployeeFields::try_from(form)?;
    let employee = state.store().insert(fields).await?;

    tracing::info!(id = employee.id, "employee added");
    Ok(Redirect::to("/"))
}

/// GET /edit/{id} - pre-filled edit form
async fn edit_form(
    State(state): State<AppState>,
    EmployeeIdPath(id): EmployeeIdPath,
) -> Result<Html<String>, ApiError> {
    let employee = state.store().get(id).await?;
    Ok(Html(views::edit(&employee)))
}

/// POST /edit/{id} - save edited fields
///
/// The id is checked before the body is looked at, so a submit for a
/// missing employee gets the not-found page whatever the form holds.
async fn edit_submit(
    State(state): State<AppState>,
    EmployeeIdPath(id): EmployeeIdPath,
    form: Result<Form<EmployeeForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    state.store().get(id).await?;

    let Form(form) = form?;
    let fields = EmployeeFields::try_from(form)?;
    state.store().update(id, fields).await?;

    tracing::info!(id, "employee updated");
    Ok(Redirect::to("/"))
}

/// POST /delete - remove the employee named by `emp_id`
async fn delete(
    State(state): State<AppState>,
    form: Result<Form<DeleteForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let Form(form) = form?;
    let raw = form
        .emp_id
        .ok_or(ValidationError::MissingField { field: "emp_id" })?;
    let id = parse_id(&raw)?;

    state.store().delete(id).await?;

    tracing::info!(id, "employee deleted");
    Ok(Redirect::to("/"))
}

/// Employee routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/add", post(add))
        .route("/edit/{id}", get(edit_form).post(edit_submit))
        .route("/delete", post(delete))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::db::{create_memory_pool, migrations, SqlEmployeeStore};
    use crate::models::Employee;
    use crate::store::{EmployeeStore, MemoryEmployeeStore};

    const MICKEY: &str =
        "name=Mickey+Test&gender=male&address=IN&phone=0123456789&salary=2000&department=Sales";

    fn app(state: AppState) -> Router {
        router().with_state(state)
    }

    async fn sql_state() -> AppState {
        let pool = create_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();
        AppState::new(SqlEmployeeStore::new(pool))
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    fn get_page(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn seed(state: &AppState, name: &str) -> Employee {
        state
            .store()
            .insert(EmployeeFields {
                name: name.into(),
                gender: "female".into(),
                address: "Porto".into(),
                phone: 5550100,
                salary: 3000,
                department: "Ops".into(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn index_on_empty_store_is_ok() {
        let response = app(sql_state().await).oneshot(get_page("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("No employees yet."));
    }

    #[tokio::test]
    async fn add_creates_one_record_and_redirects() {
        let state = sql_state().await;
        let response = app(state.clone())
            .oneshot(post_form("/add", MICKEY))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert_eq!(state.store().count().await.unwrap(), 1);

        let created = &state.store().list().await.unwrap()[0];
        assert_eq!(created.name, "Mickey Test");
        assert_eq!(created.phone, 123456789);
        assert_eq!(state.store().get(created.id).await.unwrap(), *created);
    }

    #[tokio::test]
    async fn added_record_shows_on_index() {
        let state = sql_state().await;
        let svc = app(state);
        svc.clone().oneshot(post_form("/add", MICKEY)).await.unwrap();

        let response = svc.oneshot(get_page("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("Mickey Test"));
    }

    #[tokio::test]
    async fn add_with_bad_salary_is_rejected() {
        let state = AppState::new(MemoryEmployeeStore::new());
        let body = MICKEY.replace("salary=2000", "salary=lots");
        let response = app(state.clone())
            .oneshot(post_form("/add", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.store().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn add_with_missing_field_is_rejected() {
        let state = AppState::new(MemoryEmployeeStore::new());
        let response = app(state.clone())
            .oneshot(post_form("/add", "name=Only+Name"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.store().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn edit_form_for_missing_id_is_ok_with_message() {
        let response = app(sql_state().await).oneshot(get_page("/edit/0")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response)
            .await
            .contains("Sorry, the employee does not exist."));
    }

    #[tokio::test]
    async fn edit_form_for_non_numeric_id_is_not_found() {
        let state = AppState::new(MemoryEmployeeStore::new());
        let response = app(state).oneshot(get_page("/edit/abc")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response)
            .await
            .contains("Sorry, the employee does not exist."));
    }

    #[tokio::test]
    async fn edit_form_is_prefilled() {
        let state = AppState::new(MemoryEmployeeStore::new());
        let ana = seed(&state, "Ana").await;

        let response = app(state)
            .oneshot(get_page(&format!("/edit/{}", ana.id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("name=\"name\" value=\"Ana\""));
    }

    #[tokio::test]
    async fn edit_submit_for_missing_id_with_empty_body_is_ok_with_message() {
        let request = Request::builder()
            .method("POST")
            .uri("/edit/0")
            .body(Body::empty())
            .unwrap();
        let response = app(sql_state().await).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response)
            .await
            .contains("Sorry, the employee does not exist."));
    }

    #[tokio::test]
    async fn edit_submit_for_missing_id_with_valid_body_writes_nothing() {
        let state = sql_state().await;

        let response = app(state.clone())
            .oneshot(post_form("/edit/5", MICKEY))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response)
            .await
            .contains("Sorry, the employee does not exist."));
        assert_eq!(state.store().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn add_with_overflowing_phone_writes_nothing() {
        let state = AppState::new(MemoryEmployeeStore::new());
        let body = MICKEY.replace("phone=0123456789", "phone=99999999999999999999");

        let response = app(state.clone())
            .oneshot(post_form("/add", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.store().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn edit_submit_updates_only_that_record() {
        let state = sql_state().await;
        let ana = seed(&state, "Ana").await;
        let bea = seed(&state, "Bea").await;

        let response = app(state.clone())
            .oneshot(post_form(&format!("/edit/{}", ana.id), MICKEY))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let updated = state.store().get(ana.id).await.unwrap();
        assert_eq!(updated.name, "Mickey Test");
        assert_eq!(updated.department, "Sales");
        assert_eq!(updated.salary, 2000);
        assert_eq!(state.store().get(bea.id).await.unwrap(), bea);
        assert_eq!(state.store().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn edit_submit_with_bad_phone_leaves_record_alone() {
        let state = AppState::new(MemoryEmployeeStore::new());
        let ana = seed(&state, "Ana").await;
        let body = MICKEY.replace("phone=0123456789", "phone=call+me");

        let response = app(state.clone())
            .oneshot(post_form(&format!("/edit/{}", ana.id), &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.store().get(ana.id).await.unwrap(), ana);
    }

    #[tokio::test]
    async fn delete_missing_id_is_ok_with_message() {
        let response = app(sql_state().await)
            .oneshot(post_form("/delete", "emp_id=0"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response)
            .await
            .contains("Sorry, the employee does not exist."));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let state = sql_state().await;
        let ana = seed(&state, "Ana").await;
        let bea = seed(&state, "Bea").await;

        let response = app(state.clone())
            .oneshot(post_form("/delete", &format!("emp_id={}", ana.id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(state.store().count().await.unwrap(), 1);
        assert_eq!(state.store().list().await.unwrap(), vec![bea]);
    }

    #[tokio::test]
    async fn delete_without_emp_id_is_rejected() {
        let state = AppState::new(MemoryEmployeeStore::new());
        seed(&state, "Ana").await;

        let response = app(state.clone())
            .oneshot(post_form("/delete", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.store().count().await.unwrap(), 1);
    }
}
