use workflow_studio;

fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the workflow studio application
    workflow_studio::run_app()
}
