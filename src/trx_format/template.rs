use std::{collections::HashMap, sync::LazyLock};

use regex::{Captures, Regex};

use crate::trx_format::error::{FormatError, Result};

pub const TRX_SCOPE_KEY: &str = "scope";
pub const TRX_MSG_KEY: &str = "messages";
pub const TRX_SIGN_KEY: &str = "sign_keys";
pub const TRX_BODY_KEY: &str = "trx_body";

pub const TRX_POST_JSON: &str = "[\n{ \"sign_keys\": [${sign_keys}]}\n, ${trx_body}\n]";

pub const TRX_JSON: &str = "{\n\
\t\"ref_block_num\": \"0\",\n\
\t\"ref_block_prefix\": \"0\",\n\
\t\"expiration\": \"0\",\n\
\t\"scope\": [${scope}],\n\
\t\"read_scope\": [],\n\
\t\"messages\": [${messages}],\n\
\t\"signatures\": []\n\
}";

static SLOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(\w+)\}").expect("slot pattern is valid"));

/// Fills every `${name}` slot of `template` in one pass.
///
/// Values are inserted as-is and never rescanned, so a value holding slot
/// text comes out literally. A slot with no entry in `values` fails.
pub fn render_template(template: &str, values: &HashMap<&str, String>) -> Result<String> {
    if let Some(caps) = SLOT_RE
        .captures_iter(template)
        .find(|caps| !values.contains_key(&caps[1]))
    {
        return Err(FormatError::MissingSlot(caps[1].to_string()));
    }

    let rendered = SLOT_RE.replace_all(template, |caps: &Captures<'_>| {
        values.get(&caps[1]).map(String::as_str).unwrap_or_default()
    });
    Ok(rendered.into_owned())
}
