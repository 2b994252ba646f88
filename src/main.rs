#[actix_web::main]
async fn main() -> std::io::Result<()> {
    company_formation_server::run().await
}
