use simple_admin_app::views_handler::BUNDLED_VIEWS_DIR;
use simple_admin_core::config::load_config;
use simple_admin_service::views::{PublishMapping, ViewConfig};

/// Materializes the publish mapping: copies the bundled templates into the
/// application's override directory for customization.
fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    let view_config = ViewConfig::new(config.views.base_path.clone());
    let mapping = PublishMapping {
        source: BUNDLED_VIEWS_DIR.into(),
        dest: view_config.override_dir(),
    };

    let copied = mapping.publish()?;
    println!(
        "Published {copied} template(s) to {}",
        mapping.dest.display()
    );

    Ok(())
}
