use crate::filter::is_well_formed_url;
use std::path::Path;
use thiserror::Error;

/// Why the command-line inputs were rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Incorrect number of input arguments.")]
    ArgumentCount(usize),

    #[error("Given input value '{0}' is not a valid URL.")]
    InvalidUrl(String),

    #[error("Given input value '{0}' is not a valid .csv file.")]
    InvalidOutputFile(String),
}

/// The two positional inputs, checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInputs {
    pub source_url: String,
    pub output_file: String,
}

/// Checks that `name` is a bare file name ending in `.csv`
pub fn is_valid_csv_file(name: &str) -> bool {
    if name.trim().is_empty() {
        return false;
    }
    let path = Path::new(name);
    path.extension().is_some_and(|ext| ext == "csv")
        && path.file_name().is_some_and(|file| file == name)
}

/// Validate the positional arguments (program name excluded)
pub fn validate_inputs<S: AsRef<str>>(args: &[S]) -> Result<ValidatedInputs, InputError> {
    let [source_url, output_file] = args else {
        return Err(InputError::ArgumentCount(args.len()));
    };
    let (source_url, output_file) = (source_url.as_ref(), output_file.as_ref());

    if !is_well_formed_url(source_url) {
        return Err(InputError::InvalidUrl(source_url.to_string()));
    }
    if !is_valid_csv_file(output_file) {
        return Err(InputError::InvalidOutputFile(output_file.to_string()));
    }

    Ok(ValidatedInputs {
        source_url: source_url.to_string(),
        output_file: output_file.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://volby.cz/pls/ps2017nss/ps32?xjazyk=CZ&xkraj=12&xnumnuts=7103";

    #[test]
    fn test_valid_inputs() {
        let inputs = validate_inputs(&[URL, "vysledky_prostejov.csv"]).unwrap();
        assert_eq!(inputs.source_url, URL);
        assert_eq!(inputs.output_file, "vysledky_prostejov.csv");
    }

    #[test]
    fn test_file_name_starting_with_hyphen() {
        let inputs = validate_inputs(&["https://x/a", "-out.csv"]).unwrap();
        assert_eq!(inputs.output_file, "-out.csv");
    }

    #[test]
    fn test_argument_count() {
        assert_eq!(
            validate_inputs::<&str>(&[]),
            Err(InputError::ArgumentCount(0))
        );
        assert_eq!(validate_inputs(&[URL]), Err(InputError::ArgumentCount(1)));
        assert_eq!(
            validate_inputs(&[URL, "a.csv", "b.csv"]),
            Err(InputError::ArgumentCount(3))
        );
        assert_eq!(
            InputError::ArgumentCount(3).to_string(),
            "Incorrect number of input arguments."
        );
    }

    #[test]
    fn test_invalid_url() {
        for url in ["volby.cz/pls/ps32", "https://volby.cz", "not a url", ""] {
            let err = validate_inputs(&[url, "out.csv"]).unwrap_err();
            assert_eq!(err, InputError::InvalidUrl(url.to_string()));
        }
        assert_eq!(
            InputError::InvalidUrl("x".to_string()).to_string(),
            "Given input value 'x' is not a valid URL."
        );
    }

    #[test]
    fn test_url_checked_before_file() {
        let err = validate_inputs(&["nope", "nope"]).unwrap_err();
        assert!(matches!(err, InputError::InvalidUrl(_)));
    }

    #[test]
    fn test_invalid_output_file() {
        for file in [
            "",
            "   ",
            "out.txt",
            "out.CSV",
            "out",
            ".csv",
            "dir/out.csv",
            "/tmp/out.csv",
            "out.csv/",
        ] {
            let err = validate_inputs(&[URL, file]).unwrap_err();
            assert_eq!(err, InputError::InvalidOutputFile(file.to_string()), "{file:?}");
        }
    }

    #[test]
    fn test_csv_file_names() {
        assert!(is_valid_csv_file("out.csv"));
        assert!(is_valid_csv_file("results.2017.csv"));
        assert!(is_valid_csv_file("with space.csv"));
        assert!(!is_valid_csv_file("out.csv.bak"));
    }
}
