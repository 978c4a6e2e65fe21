use crate::domain::model::GreetingRequest;
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::io::{self, Stdout, Write};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as `YYYY-MM-DD` using its own calendar fields.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Builds the six greeting lines, each terminated by `\n`.
pub fn render_greeting(request: &GreetingRequest) -> String {
    format!(
        "Welcome {} , Please verify your details:\n\
         Place: {}\n\
         Age: {}\n\
         From Date: {}\n\
         Till Date: {}\n\
         Thank you for providing your details!\n",
        request.name,
        request.place,
        request.age,
        format_date(request.from_date),
        format_date(request.till_date),
    )
}

pub struct Greeter<W: Write> {
    out: W,
}

impl Greeter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Greeter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn greet(&mut self, request: &GreetingRequest) -> Result<()> {
        tracing::debug!(
            name = %request.name,
            from = %request.from_date,
            till = %request.till_date,
            "Writing greeting"
        );

        self.out.write_all(render_greeting(request).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Greets `name` on `out` with the given details.
pub fn greet<W: Write>(
    out: W,
    name: &str,
    place: &str,
    age: i64,
    from_date: NaiveDate,
    till_date: NaiveDate,
) -> Result<()> {
    let request = GreetingRequest::new(name, place, age, from_date, till_date);
    Greeter::new(out).greet(&request)
}
