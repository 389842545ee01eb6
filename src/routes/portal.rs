//! 讲师门户统一入口
//!
//! 前端所有请求都以 POST 发往同一个地址，`action` 决定处理函数，
//! `data` 携带参数。表单（data 为 JSON 字符串）与 JSON 请求体都被接受。

use actix_web::{Either, HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::{Action, ActionForm, ActionJson, ActionRequest, ApiResponse};
use crate::services::{AuthService, CourseService, LecturerService};

// 懒加载的全局服务实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);
static LECTURER_SERVICE: Lazy<LecturerService> = Lazy::new(LecturerService::new_lazy);
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// 解码 data 并调用服务，解码失败按普通失败信封返回
macro_rules! dispatch {
    ($payload:expr, $service:expr, $method:ident, $req:expr) => {
        match $payload.decode() {
            Ok(data) => $service.$method(data, $req).await,
            Err(e) => {
                tracing::warn!("Rejected payload: {}", e);
                Ok(HttpResponse::Ok().json(ApiResponse::from_error(&e)))
            }
        }
    };
}

type ActionPayload = Either<web::Form<ActionForm>, web::Json<ActionJson>>;

pub async fn handle_action(
    req: HttpRequest,
    payload: Option<ActionPayload>,
) -> ActixResult<HttpResponse> {
    let parsed = match payload {
        Some(Either::Left(form)) => ActionRequest::from_form(form.into_inner()),
        Some(Either::Right(json)) => Ok(ActionRequest::from_json(json.into_inner())),
        None => Ok(None),
    };

    let payload = match parsed {
        Ok(Some(payload)) => payload,
        Ok(None) => {
            return Ok(HttpResponse::Ok().json(ApiResponse::error_empty("No data received")));
        }
        Err(e) => {
            tracing::error!("Failed to parse request data: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::from_error(&e)));
        }
    };

    let Some(action) = payload.resolve_action() else {
        tracing::debug!("Unknown action: {:?}", payload.action);
        return Ok(HttpResponse::Ok().json(ApiResponse::error_empty("Unknown action")));
    };

    tracing::debug!("Dispatching action '{}'", action);

    match action {
        Action::Login => dispatch!(payload, AUTH_SERVICE, login, &req),
        Action::Signup => dispatch!(payload, AUTH_SERVICE, signup, &req),
        Action::Dashboard => dispatch!(payload, LECTURER_SERVICE, dashboard, &req),
        Action::Courses => dispatch!(payload, COURSE_SERVICE, list_courses, &req),
        Action::Assignments => dispatch!(payload, LECTURER_SERVICE, list_assignments, &req),
        Action::Students => dispatch!(payload, LECTURER_SERVICE, list_students, &req),
        Action::Profile => dispatch!(payload, LECTURER_SERVICE, profile, &req),
        Action::AddCourse => dispatch!(payload, COURSE_SERVICE, add_course, &req),
        Action::DeleteCourse => dispatch!(payload, COURSE_SERVICE, delete_course, &req),
        Action::Publications | Action::AddPublication | Action::DeletePublication => {
            LECTURER_SERVICE.publications(action).await
        }
    }
}

// 配置路由
pub fn configure_portal_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(["/", "/lecturer_api.py"]).route(web::post().to(handle_action)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::entity::prelude::*;
    use crate::models::lecturers::requests::CreateLecturerRequest;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::utils::password::encode_password;
    use actix_web::{App, http::StatusCode, test};
    use sea_orm::prelude::DateTime;
    use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn setup() -> (SeaOrmStorage, Arc<dyn Storage>) {
        let storage = SeaOrmStorage::in_memory()
            .await
            .expect("in-memory database should open");
        let shared: Arc<dyn Storage> = Arc::new(storage.clone());
        (storage, shared)
    }

    async fn seed_lecturer(storage: &SeaOrmStorage, email: &str, password: &str) -> i64 {
        let scheme = AppConfig::get().auth.password_scheme;
        storage
            .create_lecturer_impl(CreateLecturerRequest {
                name: "Dr. Ada".to_string(),
                email: email.to_string(),
                password: encode_password(scheme, password).unwrap(),
            })
            .await
            .unwrap()
    }

    async fn seed_course(storage: &SeaOrmStorage, lecturer_id: i64, code: &str) -> i64 {
        CourseActiveModel {
            lecturer_id: Set(lecturer_id),
            course_code: Set(code.to_string()),
            title: Set(format!("{code} title")),
            level: Set("400".to_string()),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap()
        .course_id
    }

    async fn seed_student(storage: &SeaOrmStorage, name: &str, matric: &str) -> i64 {
        StudentActiveModel {
            full_name: Set(name.to_string()),
            matric_no: Set(matric.to_string()),
            email: Set(format!("{matric}@uni.edu")),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap()
        .student_id
    }

    async fn enroll(storage: &SeaOrmStorage, student_id: i64, course_id: i64) {
        StudentCourses::insert(StudentCourseActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
        })
        .exec_without_returning(&storage.db)
        .await
        .unwrap();
    }

    async fn seed_assignment(
        storage: &SeaOrmStorage,
        course_id: i64,
        title: &str,
        due: Option<DateTime>,
    ) {
        AssignmentActiveModel {
            course_id: Set(course_id),
            title: Set(title.to_string()),
            description: Set(None),
            due_date: Set(due),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap();
    }

    fn due(day: u32) -> Option<DateTime> {
        chrono::NaiveDate::from_ymd_opt(2025, 3, day)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
    }

    async fn post_form(
        shared: &Arc<dyn Storage>,
        action: &str,
        data: Value,
    ) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(shared.clone()))
                .configure(configure_portal_routes),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/lecturer_api.py")
            .set_form([("action", action.to_string()), ("data", data.to_string())])
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_login_with_form_payload() {
        let (storage, shared) = setup().await;
        let lecturer_id = seed_lecturer(&storage, "a@x.com", "p").await;

        let (status, body) =
            post_form(&shared, "login", json!({"email": "a@x.com", "password": "p"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["lecturer"]["lecturer_id"], lecturer_id);
        assert_eq!(body["lecturer"]["email"], "a@x.com");
        assert!(body["lecturer"].get("password").is_none());
    }

    #[actix_web::test]
    async fn test_login_rejects_wrong_password() {
        let (storage, shared) = setup().await;
        seed_lecturer(&storage, "a@x.com", "p").await;

        let (_, body) =
            post_form(&shared, "login", json!({"email": "a@x.com", "password": "nope"})).await;
        assert_eq!(body, json!({"success": false, "message": "Invalid email or password"}));

        let (_, body) =
            post_form(&shared, "login", json!({"email": "z@x.com", "password": "p"})).await;
        assert_eq!(body, json!({"success": false, "message": "Invalid email or password"}));

        let (_, body) = post_form(&shared, "login", json!({"email": "a@x.com"})).await;
        assert_eq!(body, json!({"success": false, "message": "Invalid email or password"}));
    }

    #[actix_web::test]
    async fn test_signup_creates_account_and_rejects_duplicate() {
        let (storage, shared) = setup().await;

        let data = json!({"name": "Dr. Ada", "email": "ada@uni.edu", "password": "pw"});
        let (_, body) = post_form(&shared, "signup", data.clone()).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Account created");
        assert!(body["lecturer_id"].as_i64().unwrap() > 0);

        let (status, body) = post_form(&shared, "signup", data).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": false, "message": "Email already registered"}));
        assert_eq!(Lecturers::find().count(&storage.db).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_signup_then_login_round_trip() {
        let (_, shared) = setup().await;
        let data = json!({"name": "Dr. Ada", "email": "ada@uni.edu", "password": "pw"});
        post_form(&shared, "signup", data).await;

        let (_, body) =
            post_form(&shared, "login", json!({"email": "ada@uni.edu", "password": "pw"})).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["lecturer"]["name"], "Dr. Ada");
    }

    #[actix_web::test]
    async fn test_signup_missing_field() {
        let (_, shared) = setup().await;
        let (_, body) = post_form(&shared, "signup", json!({"name": "X", "password": "pw"})).await;
        assert_eq!(
            body,
            json!({"success": false, "message": "Missing required field: email"})
        );
    }

    #[actix_web::test]
    async fn test_dashboard_without_courses() {
        let (storage, shared) = setup().await;
        let lecturer_id = seed_lecturer(&storage, "a@x.com", "p").await;

        let (_, body) = post_form(&shared, "dashboard", json!({"lecturer_id": lecturer_id})).await;

        assert_eq!(body["success"], true);
        assert_eq!(
            body["stats"],
            json!({"total_courses": 0, "total_students": 0, "pending_marking": 0})
        );
        assert_eq!(body["courses"], json!([]));
        assert_eq!(body["lecturer"]["lecturer_id"], lecturer_id);
    }

    #[actix_web::test]
    async fn test_dashboard_counts_distinct_students() {
        let (storage, shared) = setup().await;
        let lecturer_id = seed_lecturer(&storage, "a@x.com", "p").await;
        let c1 = seed_course(&storage, lecturer_id, "COSC401").await;
        let c2 = seed_course(&storage, lecturer_id, "COSC402").await;
        let s1 = seed_student(&storage, "Ada", "MAT001").await;
        let s2 = seed_student(&storage, "Bola", "MAT002").await;
        enroll(&storage, s1, c1).await;
        enroll(&storage, s1, c2).await;
        enroll(&storage, s2, c1).await;

        // ID 以字符串形式传入同样有效
        let (_, body) = post_form(
            &shared,
            "dashboard",
            json!({"lecturer_id": lecturer_id.to_string()}),
        )
        .await;

        assert_eq!(body["stats"]["total_courses"], 2);
        assert_eq!(body["stats"]["total_students"], 2);
        let courses = body["courses"].as_array().unwrap();
        assert_eq!(courses.len(), 2);
        let cosc401 = courses
            .iter()
            .find(|c| c["course_code"] == "COSC401")
            .unwrap();
        assert_eq!(cosc401["student_count"], 2);
    }

    #[actix_web::test]
    async fn test_dashboard_unknown_lecturer_is_empty() {
        let (_, shared) = setup().await;
        let (status, body) = post_form(&shared, "dashboard", json!({"lecturer_id": 999})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "lecturer": null,
                "stats": {"total_courses": 0, "total_students": 0, "pending_marking": 0},
                "courses": []
            })
        );
    }

    #[actix_web::test]
    async fn test_courses_report_student_and_assignment_counts() {
        let (storage, shared) = setup().await;
        let lecturer_id = seed_lecturer(&storage, "a@x.com", "p").await;
        let course_id = seed_course(&storage, lecturer_id, "COSC401").await;
        let s1 = seed_student(&storage, "Ada", "MAT001").await;
        let s2 = seed_student(&storage, "Bola", "MAT002").await;
        enroll(&storage, s1, course_id).await;
        enroll(&storage, s2, course_id).await;
        seed_assignment(&storage, course_id, "A1", due(1)).await;
        seed_assignment(&storage, course_id, "A2", due(2)).await;
        seed_assignment(&storage, course_id, "A3", None).await;

        let (_, body) = post_form(&shared, "courses", json!({"lecturer_id": lecturer_id})).await;

        assert_eq!(body["success"], true);
        let courses = body["courses"].as_array().unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0]["student_count"], 2);
        assert_eq!(courses[0]["assignment_count"], 3);
    }

    #[actix_web::test]
    async fn test_assignments_sorted_by_due_date_desc() {
        let (storage, shared) = setup().await;
        let lecturer_id = seed_lecturer(&storage, "a@x.com", "p").await;
        let course_id = seed_course(&storage, lecturer_id, "COSC401").await;
        seed_assignment(&storage, course_id, "Early", due(1)).await;
        seed_assignment(&storage, course_id, "Late", due(20)).await;

        let (_, body) =
            post_form(&shared, "assignments", json!({"lecturer_id": lecturer_id})).await;

        let assignments = body["assignments"].as_array().unwrap();
        assert_eq!(assignments.len(), 2);
        assert_eq!(assignments[0]["title"], "Late");
        assert_eq!(assignments[0]["due_date"], "2025-03-20 09:30:00");
        assert_eq!(assignments[0]["course_code"], "COSC401");
        assert_eq!(assignments[0]["total_submissions"], 0);
        assert_eq!(assignments[1]["pending_grading"], 0);
    }

    #[actix_web::test]
    async fn test_students_merge_course_codes() {
        let (storage, shared) = setup().await;
        let lecturer_id = seed_lecturer(&storage, "a@x.com", "p").await;
        let other_id = seed_lecturer(&storage, "b@x.com", "p").await;
        let c1 = seed_course(&storage, lecturer_id, "COSC401").await;
        let c2 = seed_course(&storage, lecturer_id, "COSC402").await;
        let foreign = seed_course(&storage, other_id, "MATH101").await;
        let s1 = seed_student(&storage, "Ada", "MAT001").await;
        let s2 = seed_student(&storage, "Zed", "MAT002").await;
        enroll(&storage, s1, c1).await;
        enroll(&storage, s1, c2).await;
        enroll(&storage, s2, foreign).await;

        let (_, body) = post_form(&shared, "students", json!({"lecturer_id": lecturer_id})).await;

        let students = body["students"].as_array().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0]["full_name"], "Ada");
        assert_eq!(students[0]["course_code"], "COSC401, COSC402");
    }

    #[actix_web::test]
    async fn test_profile_lookup() {
        let (storage, shared) = setup().await;
        let lecturer_id = seed_lecturer(&storage, "a@x.com", "p").await;

        let (_, body) = post_form(&shared, "profile", json!({"lecturer_id": lecturer_id})).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["lecturer"]["name"], "Dr. Ada");

        let (_, body) =
            post_form(&shared, "profile", json!({"lecturer_id": lecturer_id as f64})).await;
        assert_eq!(body["lecturer"]["lecturer_id"], lecturer_id);

        let (_, body) = post_form(&shared, "profile", json!({"lecturer_id": 404})).await;
        assert_eq!(body, json!({"success": false, "message": "Lecturer not found"}));
    }

    #[actix_web::test]
    async fn test_add_and_delete_course() {
        let (storage, shared) = setup().await;
        let lecturer_id = seed_lecturer(&storage, "a@x.com", "p").await;

        let (_, body) = post_form(
            &shared,
            "add_course",
            json!({
                "lecturer_id": lecturer_id,
                "course_code": "COSC401",
                "title": "AI",
                "level": 400
            }),
        )
        .await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Course added successfully");
        let course_id = body["course_id"].as_i64().unwrap();

        let (_, body) = post_form(
            &shared,
            "delete_course",
            json!({"course_id": course_id, "lecturer_id": lecturer_id}),
        )
        .await;
        assert_eq!(
            body,
            json!({"success": true, "message": "Course deleted successfully"})
        );
        assert_eq!(Courses::find().count(&storage.db).await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_delete_missing_course_still_succeeds() {
        let (_, shared) = setup().await;
        let (_, body) = post_form(&shared, "delete_course", json!({"course_id": 12345})).await;
        assert_eq!(
            body,
            json!({"success": true, "message": "Course deleted successfully"})
        );
    }

    #[actix_web::test]
    async fn test_delete_is_scoped_to_owner() {
        let (storage, shared) = setup().await;
        let owner = seed_lecturer(&storage, "a@x.com", "p").await;
        let intruder = seed_lecturer(&storage, "b@x.com", "p").await;
        let course_id = seed_course(&storage, owner, "COSC401").await;

        let (_, body) = post_form(
            &shared,
            "delete_course",
            json!({"course_id": course_id, "lecturer_id": intruder}),
        )
        .await;
        assert_eq!(body["success"], true);
        assert_eq!(Courses::find().count(&storage.db).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_delete_course_cascades_to_enrollments_and_assignments() {
        let (storage, shared) = setup().await;
        let lecturer_id = seed_lecturer(&storage, "a@x.com", "p").await;
        let course_id = seed_course(&storage, lecturer_id, "COSC401").await;
        let kept_course = seed_course(&storage, lecturer_id, "COSC402").await;
        let student_id = seed_student(&storage, "Ada", "MAT001").await;
        enroll(&storage, student_id, course_id).await;
        enroll(&storage, student_id, kept_course).await;
        seed_assignment(&storage, course_id, "A1", due(1)).await;

        let (_, body) = post_form(
            &shared,
            "delete_course",
            json!({"course_id": course_id, "lecturer_id": lecturer_id}),
        )
        .await;
        assert_eq!(body["success"], true);

        // 只删除该课程的选课与作业，学生本身保留
        assert_eq!(StudentCourses::find().count(&storage.db).await.unwrap(), 1);
        assert_eq!(Assignments::find().count(&storage.db).await.unwrap(), 0);
        assert_eq!(Students::find().count(&storage.db).await.unwrap(), 1);

        let (_, body) = post_form(&shared, "dashboard", json!({"lecturer_id": lecturer_id})).await;
        assert_eq!(body["stats"]["total_courses"], 1);
        assert_eq!(body["stats"]["total_students"], 1);
    }

    #[actix_web::test]
    async fn test_publications_are_empty() {
        let (_, shared) = setup().await;
        for action in ["publications", "add_publication", "delete_publication"] {
            let (_, body) = post_form(&shared, action, json!({})).await;
            assert_eq!(body, json!({"success": true, "publications": []}));
        }
    }

    #[actix_web::test]
    async fn test_unknown_action_is_not_an_http_error() {
        let (_, shared) = setup().await;
        let (status, body) = post_form(&shared, "announcement", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": false, "message": "Unknown action"}));
    }

    #[actix_web::test]
    async fn test_json_body_at_root_path() {
        let (storage, shared) = setup().await;
        seed_lecturer(&storage, "a@x.com", "p").await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(shared.clone()))
                .configure(configure_portal_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(json!({"action": "login", "data": {"email": "a@x.com", "password": "p"}}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
    }

    #[actix_web::test]
    async fn test_empty_body_reports_no_data() {
        let (_, shared) = setup().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(shared.clone()))
                .configure(configure_portal_routes),
        )
        .await;

        let req = test::TestRequest::post().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"success": false, "message": "No data received"}));
    }

    #[actix_web::test]
    async fn test_malformed_form_data_is_server_error() {
        let (_, shared) = setup().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(shared.clone()))
                .configure(configure_portal_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/lecturer_api.py")
            .set_form([("action", "login"), ("data", "{not json")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_get_is_not_routed() {
        let (_, shared) = setup().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(shared.clone()))
                .configure(configure_portal_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
