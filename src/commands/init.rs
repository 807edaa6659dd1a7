use std::path::Path;

use crate::{
    InitArgs,
    config::{Config, MarkdownConfig, PageConfig, SiteConfig, TemplatesConfig},
};

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{{ page.title }} | {{ site.name }}</title>
  </head>
  <body>
    <main>
      {{ content | wrap_images | safe }}
    </main>
  </body>
</html>
"#;

const INDEX_PAGE: &str = r#"# Welcome

Every image on this page is centered by the `wrap_images` filter.

![Example](example.png)
"#;

pub async fn run(args: &InitArgs) -> Result<(), anyhow::Error> {
    let path = if args.path.is_relative() {
        std::env::current_dir()?.join(&args.path)
    } else {
        args.path.clone()
    };

    if !path.exists() {
        if args.create {
            tokio::fs::create_dir_all(&path).await?;
            println!("Created directory {path}", path = path.display());
        } else {
            return Err(anyhow::anyhow!(
                "Directory does not exist: {path}",
                path = path.display()
            ));
        }
    }

    init_project(&path).await
}

/// Write `imgwrap.yaml`, a starter page template and an index page into
/// an existing directory. Refuses to overwrite an existing config.
async fn init_project(path: &Path) -> Result<(), anyhow::Error> {
    let config_file = path.join("imgwrap.yaml");
    if config_file.exists() {
        return Err(anyhow::anyhow!(
            "Config file already exists: {config_file}",
            config_file = config_file.display()
        ));
    }

    let default_config = Config {
        site: SiteConfig {
            name: "My Site".into(),
            url: None,
            content: "content".into(),
            output: "_site".into(),
        },
        templates: TemplatesConfig::default(),
        markdown: MarkdownConfig::default(),
        pages: vec![PageConfig {
            source: "index.md".into(),
            title: None,
            template: None,
        }],
    };

    println!("Initializing project in {}", path.display());

    let config_text = serde_yaml::to_string(&default_config)?;
    tokio::fs::write(&config_file, config_text).await?;
    println!(
        "Created config file {config_file}",
        config_file = config_file.display()
    );

    let templates_dir = path.join(&default_config.templates.path);
    tokio::fs::create_dir_all(&templates_dir).await?;
    write_if_missing(&templates_dir.join(&default_config.templates.page), PAGE_TEMPLATE).await?;

    let content_dir = path.join(&default_config.site.content);
    tokio::fs::create_dir_all(&content_dir).await?;
    write_if_missing(&content_dir.join("index.md"), INDEX_PAGE).await?;

    Ok(())
}

async fn write_if_missing(path: &Path, content: &str) -> Result<(), anyhow::Error> {
    if path.exists() {
        println!("Keeping existing {}", path.display());
        return Ok(());
    }

    tokio::fs::write(path, content).await?;
    println!("Created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::Builder;

    #[tokio::test]
    async fn test_init_project_builds_wrapped_images() {
        let dir = tempfile::tempdir().unwrap();
        init_project(dir.path()).await.unwrap();

        let config = Config::load_from_file(&dir.path().join("imgwrap.yaml"))
            .await
            .unwrap();
        assert_eq!(config.pages.len(), 1);

        Builder::new(config, dir.path().to_path_buf())
            .build()
            .await
            .unwrap();

        let index = std::fs::read_to_string(dir.path().join("_site/index.html")).unwrap();
        assert!(index.contains("<title>My Site | My Site</title>"));
        assert!(index.contains(r#"<p align="middle"><img src="example.png" alt="Example" /></p>"#));
    }

    #[tokio::test]
    async fn test_init_project_refuses_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("imgwrap.yaml"), "site:\n  name: Mine\n").unwrap();

        let err = init_project(dir.path()).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));

        let config = std::fs::read_to_string(dir.path().join("imgwrap.yaml")).unwrap();
        assert_eq!(config, "site:\n  name: Mine\n");
        assert!(!dir.path().join("templates").exists());
    }

    #[tokio::test]
    async fn test_init_project_keeps_existing_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("templates")).unwrap();
        std::fs::write(dir.path().join("templates/page.html"), "custom").unwrap();

        init_project(dir.path()).await.unwrap();

        let template = std::fs::read_to_string(dir.path().join("templates/page.html")).unwrap();
        assert_eq!(template, "custom");
        assert!(dir.path().join("content/index.md").is_file());
    }
}
