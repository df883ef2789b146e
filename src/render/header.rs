//! Header block of the minutes.

use crate::config::HeaderConfig;
use crate::headers::MeetingHeaders;

/// Fill the header template with meeting metadata.
///
/// `source_reference` is embedded verbatim as the IRC log link. Missing
/// fields leave their slot empty.
pub fn render_header(
    headers: &MeetingHeaders,
    source_reference: &str,
    config: &HeaderConfig,
) -> String {
    format!(
        "![{logo_alt}]({logo_url})\n\
         \n\
         # Meeting: {meeting}\n\
         **Date:** {date}\n\
         \n\
         See also the [Agenda]({agenda}) and the [IRC Log]({log})\n\
         \n\
         ## Attendees\n\
         **Present:** {present}\n\
         \n\
         **Regrets:** {regrets}\n\
         \n\
         **Guests:** {guests}\n\
         \n\
         **Chair:** {chair}\n\
         \n\
         **Scribe(s):** {scribe}\n\
         \n",
        logo_alt = config.logo_alt,
        logo_url = config.logo_url,
        meeting = headers.meeting,
        date = headers.date,
        agenda = headers.agenda,
        log = source_reference,
        present = headers.present,
        regrets = headers.regrets,
        guests = headers.guests,
        chair = headers.chair,
        scribe = headers.scribe,
    )
}
