#[actix_web::main]
async fn main() -> std::io::Result<()> {
    atendimento_docs_server::run().await
}
