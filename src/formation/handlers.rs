use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{error, web, FromRequest, HttpMessage, HttpRequest, HttpResponse, Responder};

use crate::formation::examples::example_requests;
use crate::formation::models::{CompanyFormationForm, CompanyFormationRequest};
use crate::formation::page::render_form_page;
use crate::generators::validation::ValidationErrors;
use crate::generators::{FormationGenerator, GeneratedDocument, Generator, Validator};
use crate::ErrorResponse;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body of a formation request, decoded according to its content type.
enum FormationPayload {
    Json(CompanyFormationRequest),
    Form(CompanyFormationForm),
}

/// Form bodies go through `web::Form`, everything else through `web::Json`,
/// so each failure is reported by the matching extractor's error handler.
async fn read_payload(req: &HttpRequest, payload: web::Payload) -> Result<FormationPayload, error::Error> {
    let mut payload = payload.into_inner();
    if req.content_type().eq_ignore_ascii_case(FORM_CONTENT_TYPE) {
        let form = web::Form::<CompanyFormationForm>::from_request(req, &mut payload).await?;
        Ok(FormationPayload::Form(form.into_inner()))
    } else {
        let json = web::Json::<CompanyFormationRequest>::from_request(req, &mut payload).await?;
        Ok(FormationPayload::Json(json.into_inner()))
    }
}

fn validation_failed(errors: ValidationErrors) -> HttpResponse {
    log::warn!("Rejected formation request: {}", errors.to_message().replace('\n', " "));
    HttpResponse::BadRequest().json(ErrorResponse::bad_request(&errors.to_message()))
}

fn pdf_response(document: GeneratedDocument) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(document.filename)],
        })
        .body(document.pdf)
}

#[utoipa::path(
    post,
    path = "/form-company",
    tag = "Company Formation",
    request_body(
        content = CompanyFormationRequest,
        description = "JSON body, or the same fields form-encoded"
    ),
    responses(
        (status = 200, description = "Formation document as a PDF attachment"),
        (status = 400, description = "Invalid request or unsupported jurisdiction", body = ErrorResponse),
        (status = 500, description = "Rendering could not be scheduled", body = ErrorResponse)
    )
)]
pub async fn form_company(
    req: HttpRequest,
    payload: web::Payload,
    generator: web::Data<FormationGenerator>,
) -> Result<HttpResponse, error::Error> {
    let request = match read_payload(&req, payload).await? {
        FormationPayload::Json(request) => request,
        FormationPayload::Form(form) => match CompanyFormationRequest::try_from(form) {
            Ok(request) => request,
            Err(errors) => return Ok(validation_failed(errors)),
        },
    };

    let formation = match request.validate() {
        Ok(formation) => formation,
        Err(errors) => return Ok(validation_failed(errors)),
    };

    log::info!(
        "Generating {} {} formation document for '{}'",
        formation.state,
        formation.company_type,
        formation.company_name
    );

    let generator = *generator.get_ref();
    let response = match web::block(move || generator.generate(formation)).await {
        Ok(Ok(document)) => {
            log::info!("Generated '{}' ({} bytes)", document.title, document.pdf.len());
            pdf_response(document)
        }
        Ok(Err(e)) => {
            log::warn!("Document generation failed: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(&e.to_string()))
        }
        Err(e) => {
            log::error!("Blocking pool failed while rendering document: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Document rendering was interrupted"))
        }
    };

    Ok(response)
}

#[utoipa::path(
    get,
    path = "/form-company-schema",
    tag = "Company Formation",
    responses(
        (status = 200, description = "Example payloads, one per supported document", body = [CompanyFormationRequest])
    )
)]
pub async fn form_company_schema() -> impl Responder {
    HttpResponse::Ok().json(example_requests())
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Company Formation",
    responses(
        (status = 200, description = "HTML form for submitting a formation request", content_type = "text/html", body = String)
    )
)]
pub async fn company_form() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_form_page())
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string()));
    error::InternalError::from_response(err, response).into()
}

fn form_error_handler(err: error::UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string()));
    error::InternalError::from_response(err, response).into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .service(web::resource("/").route(web::get().to(company_form)))
        .service(web::resource("/form-company").route(web::post().to(form_company)))
        .service(
            web::resource("/form-company-schema").route(web::get().to(form_company_schema)),
        );
}
