//! Writes `marketing_campaign_lifecycle.csv`: 26 phases across 7 stages.

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct Phase {
    #[serde(rename = "Phase ID")]
    phase_id: String,
    #[serde(rename = "Lifecycle Stage")]
    stage: &'static str,
    #[serde(rename = "Process Action")]
    action: &'static str,
    #[serde(rename = "Standard Operating Procedure (SOP)")]
    sop: &'static str,
    #[serde(rename = "RACI Matrix Role")]
    raci: &'static str,
    #[serde(rename = "Critical KPI")]
    kpi: &'static str,
    #[serde(rename = "Tech Stack")]
    tools: &'static str,
}

/// (stage, action, sop, raci, kpi, tools)
type Row = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const ROWS: [Row; 26] = [
    ("Strategy", "Define campaign objectives", "Align objectives with quarterly revenue targets and document them in the campaign brief.", "CMO (A), Marketing Director (R)", "Objective-to-revenue alignment score", "Salesforce | Tableau"),
    ("Strategy", "Market and competitor research", "Run a competitive scan and summarise positioning gaps for the brief.", "Market Research Lead (R), CMO (I)", "Share of voice", "Semrush | Similarweb | Google Trends"),
    ("Strategy", "Audience segmentation", "Build segments from CRM and behavioural data; validate sizes with analytics.", "Data Analyst (R), Marketing Director (A)", "Addressable audience size", "Salesforce | Segment | Google Analytics 4"),
    ("Strategy", "Budget allocation", "Split budget by channel using last-touch and multi-touch history.", "Finance Partner (C), Marketing Director (A)", "Planned ROAS", "Anaplan | Tableau"),
    ("Planning", "Campaign calendar", "Publish the channel calendar with owners and hard dependencies.", "Campaign Manager (R), Channel Leads (C)", "On-time milestone rate", "Asana | Google Workspace"),
    ("Planning", "Messaging framework", "Draft the value proposition and proof points per segment.", "Product Marketing (R), CMO (A)", "Message test win rate", "Notion | Google Workspace"),
    ("Planning", "Measurement plan", "Define KPIs, UTM conventions and the attribution model before launch.", "Marketing Ops (R), Data Analyst (C)", "Tracking coverage", "Google Analytics 4 | Google Tag Manager"),
    ("Planning", "Compliance review", "Review claims, consent and data use with legal.", "Legal Counsel (A), Campaign Manager (R)", "Review cycle time", "Ironclad | OneTrust"),
    ("Creative", "Creative brief", "Hand the agency a single-page brief with mandatories and KPIs.", "Creative Director (A), Campaign Manager (R)", "Brief approval time", "Asana | Figma"),
    ("Creative", "Asset production", "Produce assets per channel spec and version them in the DAM.", "Design Team (R), Creative Director (A)", "Assets delivered on time", "Figma | Adobe Creative Cloud | Bynder"),
    ("Creative", "Copywriting and localisation", "Write and localise copy; run a terminology check per market.", "Copy Lead (R), Regional Marketing (C)", "Localisation defect rate", "Smartling | Google Workspace"),
    ("Creative", "Creative QA", "Check every asset against brand and accessibility guidelines.", "Brand Manager (A), QA Specialist (R)", "First-pass approval rate", "Frontify | Figma"),
    ("Launch", "Landing page build", "Build and test landing pages with forms wired to the CRM.", "Web Team (R), Marketing Ops (C)", "Page conversion rate", "Webflow | HubSpot"),
    ("Launch", "Paid media setup", "Configure campaigns, audiences and pixels per the media plan.", "Performance Marketing (R), Media Agency (C)", "Cost per acquisition", "Google Ads | Meta Ads Manager | LinkedIn Campaign Manager"),
    ("Launch", "Email and nurture setup", "Build nurture flows and suppression lists; send seed tests.", "Lifecycle Marketing (R), Marketing Ops (A)", "Email deliverability", "HubSpot | Litmus"),
    ("Launch", "Go-live checklist", "Sign off tracking, budgets and creative before switching on.", "Campaign Manager (A), Channel Leads (R)", "Launch defects", "Asana | Google Tag Manager"),
    ("Engagement", "Social community management", "Respond to comments within SLA and escalate issues.", "Social Media Manager (R), PR Lead (I)", "Engagement rate", "Sprout Social | Brandwatch"),
    ("Engagement", "Lead scoring", "Score inbound leads and route MQLs to sales.", "Marketing Ops (R), Sales Ops (C)", "MQL to SQL conversion", "Salesforce | HubSpot"),
    ("Engagement", "Event and webinar execution", "Run the event playbook and sync attendees to the CRM.", "Events Manager (R), Campaign Manager (A)", "Attendee-to-pipeline rate", "ON24 | Salesforce"),
    ("Optimization", "A/B testing", "Test one variable at a time and stop at the planned sample size.", "Performance Marketing (R), Data Analyst (C)", "Conversion rate uplift", "Optimizely | Google Analytics 4"),
    ("Optimization", "Budget reallocation", "Shift weekly spend towards channels beating target ROAS.", "Marketing Director (A), Performance Marketing (R)", "ROAS", "Google Ads | Meta Ads Manager | Tableau"),
    ("Optimization", "Audience refinement", "Prune low-performing segments and build lookalikes.", "Data Analyst (R), Performance Marketing (C)", "Cost per lead", "Segment | Meta Ads Manager"),
    ("Optimization", "Creative refresh", "Rotate creative when frequency or CTR thresholds are hit.", "Creative Director (A), Design Team (R)", "CTR", "Figma | Adobe Creative Cloud"),
    ("Analysis", "Attribution reporting", "Report pipeline and revenue by channel using the agreed model.", "Data Analyst (R), CMO (I)", "Marketing-sourced pipeline", "Tableau | Salesforce | Google Analytics 4"),
    ("Analysis", "Campaign retrospective", "Run a blameless retro and log learnings in the playbook.", "Campaign Manager (R), All Stakeholders (C)", "Action items closed", "Notion | Asana"),
    ("Analysis", "Executive summary", "Summarise ROI, learnings and next steps for leadership.", "Marketing Director (R), CMO (A)", "ROI", "Google Workspace | Tableau"),
];

fn main() -> Result<()> {
    let output_path = "marketing_campaign_lifecycle.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;

    for (i, &(stage, action, sop, raci, kpi, tools)) in ROWS.iter().enumerate() {
        writer
            .serialize(Phase {
                phase_id: format!("MC-{:02}", i + 1),
                stage,
                action,
                sop,
                raci,
                kpi,
                tools,
            })
            .with_context(|| format!("writing phase {}", i + 1))?;
    }
    writer.flush().context("flushing output file")?;

    println!("Wrote {} phases to {output_path}", ROWS.len());
    Ok(())
}
