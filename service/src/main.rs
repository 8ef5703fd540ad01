use model_service::config::ServiceConfig;

#[rocket::launch]
fn rocket() -> _ {
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    model_service::build(&config)
}
