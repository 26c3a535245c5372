use json_recipes::{file, stream, Order, Person, Result};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const PEOPLE: &str = r#"
    {"name": "Fred", "age": 40}
    {"name": "Mary", "age": 21}
    {"name": "Pat", "age": 30}
"#;

const ORDER: &str = r#"
{
    "id": "12345",
    "items": [
        {
            "id": "xyz123",
            "name": "Thing 1"
        },
        {
            "id": "abc789",
            "name": "Thing 2"
        }
    ],
    "date_ordered": "01 May 20 13:01 +0000",
    "customer_id": "3"
}"#;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(category = ?err.classify(), "{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    to_and_from_file()?;
    stream_people()?;
    custom_parsing()?;
    Ok(())
}

fn to_and_from_file() -> Result<()> {
    let fred = Person {
        name: "Fred".to_owned(),
        age: 40,
    };

    // Removed when `tmp` drops.
    let tmp = tempfile::Builder::new()
        .prefix("sample-")
        .tempfile()?;
    tracing::info!(path = %tmp.path().display(), "writing person");
    file::to_path(tmp.path(), &fred)?;

    let from_file: Person = file::from_path(tmp.path())?;
    println!("{:?}", from_file);
    Ok(())
}

fn stream_people() -> Result<()> {
    let mut encoder = stream::Encoder::new(Vec::new());
    for person in stream::Decoder::<_, Person>::new(PEOPLE.as_bytes()) {
        let person = person?;
        println!("{:?}", person);
        encoder.encode(&person)?;
    }
    println!("{}", String::from_utf8_lossy(encoder.get_ref()));
    Ok(())
}

fn custom_parsing() -> Result<()> {
    let order: Order = serde_json::from_str(ORDER)?;
    println!("{:?}", order);
    if let Some(month) = order.date_ordered.month() {
        println!("{}", month.name());
    }
    let out = serde_json::to_string(&order)?;
    println!("{}", out);
    Ok(())
}
