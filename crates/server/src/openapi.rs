use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub timestamp: String }

#[derive(ToSchema)]
pub struct IdDoc { pub id: i32 }

#[derive(ToSchema)]
pub struct ListFilterDoc { pub limit: Option<u64>, pub offset: Option<u64> }

#[derive(ToSchema, serde::Serialize)]
#[allow(dead_code)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategoryDoc { GraphicDesign, DigitalPrinting, Packaging, Other }

#[derive(ToSchema)]
pub struct ProjectFilterDoc {
    pub category: Option<ProjectCategoryDoc>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(ToSchema)]
pub struct CreateServiceDoc {
    pub title_en: String,
    pub title_fr: String,
    pub description_en: String,
    pub description_fr: String,
}

#[derive(ToSchema)]
pub struct UpdateServiceDoc {
    pub id: i32,
    pub title_en: Option<String>,
    pub title_fr: Option<String>,
    pub description_en: Option<String>,
    pub description_fr: Option<String>,
}

#[derive(ToSchema)]
pub struct CreateProjectDoc {
    pub title_en: String,
    pub title_fr: String,
    pub description_en: String,
    pub description_fr: String,
    pub category: ProjectCategoryDoc,
}

#[derive(ToSchema)]
pub struct UpdateProjectDoc {
    pub id: i32,
    pub title_en: Option<String>,
    pub title_fr: Option<String>,
    pub description_en: Option<String>,
    pub description_fr: Option<String>,
    pub category: Option<ProjectCategoryDoc>,
}

#[derive(ToSchema)]
pub struct CreateProjectImageDoc {
    pub project_id: i32,
    pub image_url: String,
    pub alt_text_en: Option<String>,
    pub alt_text_fr: Option<String>,
    /// Defaults to 0.
    pub display_order: Option<i32>,
}

#[derive(ToSchema)]
pub struct CreateCaseStudyImageDoc {
    pub case_study_id: i32,
    pub image_url: String,
    pub alt_text_en: Option<String>,
    pub alt_text_fr: Option<String>,
    /// Defaults to 0.
    pub display_order: Option<i32>,
}

#[derive(ToSchema)]
pub struct CreateCaseStudyDoc {
    pub title_en: String,
    pub title_fr: String,
    pub description_en: String,
    pub description_fr: String,
    pub client_name_en: String,
    pub client_name_fr: String,
    pub challenge_description_en: String,
    pub challenge_description_fr: String,
    pub solution_description_en: String,
    pub solution_description_fr: String,
    pub results_description_en: String,
    pub results_description_fr: String,
}

#[derive(ToSchema)]
pub struct UpdateCaseStudyDoc {
    pub id: i32,
    pub title_en: Option<String>,
    pub title_fr: Option<String>,
    pub description_en: Option<String>,
    pub description_fr: Option<String>,
    pub client_name_en: Option<String>,
    pub client_name_fr: Option<String>,
    pub challenge_description_en: Option<String>,
    pub challenge_description_fr: Option<String>,
    pub solution_description_en: Option<String>,
    pub solution_description_fr: Option<String>,
    pub results_description_en: Option<String>,
    pub results_description_fr: Option<String>,
}

#[derive(ToSchema)]
pub struct ContactFormSubmissionDoc { pub name: String, pub email: String, pub message: String }

#[derive(ToSchema)]
pub struct UpdateContactDetailsDoc {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub working_hours_en: Option<String>,
    pub working_hours_fr: Option<String>,
}

#[derive(ToSchema)]
pub struct UpdateHomePageContentDoc {
    pub hero_title_en: Option<String>,
    pub hero_title_fr: Option<String>,
    pub hero_subtitle_en: Option<String>,
    pub hero_subtitle_fr: Option<String>,
    pub about_section_en: Option<String>,
    pub about_section_fr: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::site::healthcheck,
        crate::routes::services::create_service,
        crate::routes::services::get_services,
        crate::routes::services::get_service,
        crate::routes::services::update_service,
        crate::routes::services::delete_service,
        crate::routes::projects::create_project,
        crate::routes::projects::get_projects,
        crate::routes::projects::get_project,
        crate::routes::projects::update_project,
        crate::routes::projects::delete_project,
        crate::routes::projects::create_project_image,
        crate::routes::projects::get_project_images,
        crate::routes::projects::delete_project_image,
        crate::routes::case_studies::create_case_study,
        crate::routes::case_studies::get_case_studies,
        crate::routes::case_studies::get_case_study,
        crate::routes::case_studies::update_case_study,
        crate::routes::case_studies::delete_case_study,
        crate::routes::case_studies::create_case_study_image,
        crate::routes::case_studies::get_case_study_images,
        crate::routes::case_studies::delete_case_study_image,
        crate::routes::site::create_contact_form_submission,
        crate::routes::site::get_contact_form_submissions,
        crate::routes::site::get_contact_details,
        crate::routes::site::update_contact_details,
        crate::routes::site::get_home_page_content,
        crate::routes::site::update_home_page_content,
    ),
    components(
        schemas(
            HealthResponse,
            IdDoc,
            ListFilterDoc,
            ProjectCategoryDoc,
            ProjectFilterDoc,
            CreateServiceDoc,
            UpdateServiceDoc,
            CreateProjectDoc,
            UpdateProjectDoc,
            CreateProjectImageDoc,
            CreateCaseStudyImageDoc,
            CreateCaseStudyDoc,
            UpdateCaseStudyDoc,
            ContactFormSubmissionDoc,
            UpdateContactDetailsDoc,
            UpdateHomePageContentDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "services"),
        (name = "projects"),
        (name = "case_studies"),
        (name = "contact"),
        (name = "home")
    )
)]
pub struct ApiDoc;
