use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CompanyName;

pub fn set(company: &mut CompanyName, name: &str) -> Result<CmdResult> {
    company.set(name)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Company name set to '{}'",
        company
    ))))
}
