use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Kind;
use crate::store::ObjectStore;

/// How each record's string form is written inside the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// `["[User] (..) {..}", ...]`
    Quoted,
    /// `[[User] (..) {..}, ...]`
    Bare,
}

pub fn run<S: ObjectStore>(
    store: &S,
    type_name: Option<&str>,
    listing: Listing,
) -> Result<CmdResult> {
    let kind = type_name.map(str::parse::<Kind>).transpose()?;
    let items: Vec<String> = store
        .records_of(kind)
        .into_iter()
        .map(|record| match listing {
            Listing::Quoted => format!("\"{}\"", record),
            Listing::Bare => record.to_string(),
        })
        .collect();
    Ok(CmdResult::default().with_output(format!("[{}]", items.join(", "))))
}
