use crate::finding::CheckReport;
use crate::rules;
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::HashMap;

pub fn format(report: &CheckReport) -> String {
    let catalogue = rules::all_rules();

    let rule_index: HashMap<&str, i64> = catalogue
        .iter()
        .enumerate()
        .map(|(i, r)| (r.id, i as i64))
        .collect();

    let descriptors: Vec<ReportingDescriptor> = catalogue
        .iter()
        .map(|r| {
            let mut rule = ReportingDescriptor::builder().id(r.id.to_string()).build();
            rule.short_description = Some(
                MultiformatMessageString::builder()
                    .text(r.message.to_string())
                    .build(),
            );
            rule.help = Some(
                MultiformatMessageString::builder()
                    .text(r.remediation.to_string())
                    .build(),
            );
            rule
        })
        .collect();

    // Every validation error fails the run, so all results are error level.
    let results: Vec<SarifResult> = report
        .errors
        .iter()
        .map(|e| {
            let mut result = SarifResult::builder()
                .message(Message::builder().text(e.message.clone()).build())
                .build();

            result.rule_id = Some(e.rule_id.clone());
            result.level = Some(ResultLevel::Error);
            result.rule_index = rule_index.get(e.rule_id.as_str()).copied();

            let uri = e.file.to_string_lossy().replace('\\', "/");
            let mut location = Location::builder().build();
            let mut physical = PhysicalLocation::builder().build();
            physical.artifact_location = Some(ArtifactLocation::builder().uri(uri).build());
            location.physical_location = Some(physical);
            result.locations = Some(vec![location]);

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("oxidized-frontmatter")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(descriptors)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}
