#[cfg(test)]
mod tests {
    use inlay::cli::{run, Args, Runner};
    use inlay::error::Error;
    use std::path::PathBuf;
    use test_log::test;

    fn demo_args() -> Args {
        Args {
            template_dir: PathBuf::from("demos/page"),
            data: None,
            data_file: Some(PathBuf::from("demos/page/data.json")),
            output: None,
            verbose: 2,
        }
    }

    #[test]
    fn renders_the_demo_page() {
        let output = Runner::new(demo_args()).render().unwrap();
        let expected = std::fs::read_to_string("tests/expected/page.html").unwrap();
        assert_eq!(output, expected);
    }

    #[test]
    fn renders_empty_states() {
        let args = Args {
            data: Some(
                r#"{"title": "Empty", "show_footer": false, "links": [], "items": []}"#.into(),
            ),
            data_file: None,
            ..demo_args()
        };
        let output = Runner::new(args).render().unwrap();
        let expected = concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "  <head>\n",
            "    <title>Empty | Inlay demo</title>\n",
            "    <link rel=\"stylesheet\" href=\"site.css\">\n",
            "  </head>\n",
            "  <body>\n",
            "    <nav>\n",
            "    </nav>\n",
            "    <ul>\n",
            "      <li>Nothing yet</li>\n",
            "    </ul>\n",
            "    \n",
            "  </body>\n",
            "</html>\n",
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn writes_the_output_file() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let output = tmp_dir.path().join("site/index.html");
        let args = Args { output: Some(output.clone()), ..demo_args() };

        run(args).unwrap();

        let expected = std::fs::read_to_string("tests/expected/page.html").unwrap();
        assert_eq!(std::fs::read_to_string(output).unwrap(), expected);
    }

    #[test]
    fn reports_missing_manifest() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let args = Args { template_dir: tmp_dir.path().to_path_buf(), ..demo_args() };
        assert!(matches!(Runner::new(args).render(), Err(Error::ConfigNotFound { .. })));
    }

    #[test]
    fn rejects_non_object_data() {
        let args = Args { data: Some("[1, 2, 3]".into()), data_file: None, ..demo_args() };
        assert!(matches!(Runner::new(args).render(), Err(Error::InvalidData { .. })));
    }
}
