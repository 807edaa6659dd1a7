use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::{WrapArgs, filters::wrap_images};

pub async fn run(args: &WrapArgs) -> Result<(), anyhow::Error> {
    let mut stdout = tokio::io::stdout();

    match &args.input {
        Some(path) => {
            let file = tokio::fs::File::open(path).await?;
            wrap_stream(file, &mut stdout).await?;
        }
        None => wrap_stream(tokio::io::stdin(), &mut stdout).await?,
    }

    Ok(())
}

/// Read all of `input`, center its images, and write the result to `output`.
async fn wrap_stream<R, W>(mut input: R, output: &mut W) -> Result<(), std::io::Error>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut html = String::new();
    input.read_to_string(&mut html).await?;

    output.write_all(wrap_images(&html).as_bytes()).await?;
    output.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_wrap_stream() {
        let input = r#"<h1>Trip</h1><img src="a.png"> and <img src="b.png"/>"#.as_bytes();
        let mut output = Vec::new();

        wrap_stream(input, &mut output).await.unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            r#"<h1>Trip</h1><p align="middle"><img src="a.png"></p> and <p align="middle"><img src="b.png"/></p>"#
        );
    }

    #[tokio::test]
    async fn test_wrap_stream_without_images_is_unchanged() {
        let mut output = Vec::new();

        wrap_stream("plain text\n".as_bytes(), &mut output).await.unwrap();

        assert_eq!(output, b"plain text\n");
    }

    #[tokio::test]
    async fn test_wrap_stream_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fragment.html");
        std::fs::write(&path, "<img src=x>").unwrap();

        let mut output = Vec::new();
        let file = tokio::fs::File::open(&path).await.unwrap();
        wrap_stream(file, &mut output).await.unwrap();

        assert_eq!(output, br#"<p align="middle"><img src=x></p>"#);
    }

    #[tokio::test]
    async fn test_wrap_stream_rejects_invalid_utf8() {
        let mut output = Vec::new();
        let result = wrap_stream(&[0xff, 0xfe][..], &mut output).await;
        assert!(result.is_err());
        assert!(output.is_empty());
    }
}
