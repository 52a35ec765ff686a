//! Prompts for the AI analysis chat

use crate::domain::model::{EnergyMix, TransportInput, TransportKind};
use crate::types::FootprintSummary;

/// Role framing shared by every analysis conversation
pub const ANALYST_ROLE_PROMPT: &str = "You are an expert analyst in climate science and renewable energy. \
Your task is to provide a deep, data-driven analysis of a user's carbon footprint \
based on the data they provided from a calculator. Structure your response in \
well-formatted Markdown.";

/// Task instructions appended after the computed figures
pub const ANALYST_TASK_PROMPT: &str = r#"**Your Task:**
Based on all the data above, provide a comprehensive analysis and actionable recommendations.

1.  **Executive Summary:** Start with a brief, impactful summary. Highlight the total potential emissions and the significant positive impact of their green energy choice.
2.  **Deep Dive Analysis:** Analyze the sources of their emissions (which transport is the biggest contributor?). Explain the significance of the total CO2 figure in a relatable way. Analyze their chosen green energy mix and why it resulted in the mitigated footprint.
3.  **Predictions & Future Impact:** Assume this input represents a daily activity and project the annual CO2 emissions before and after their green energy choices. Frame the annual reduction in a powerful way.
4.  **Actionable Recommendations:** Provide 3 clear, personalized recommendations for further reducing their footprint, based on their specific data.
5.  **Concluding Encouragement:** End with a positive and encouraging message.

Make it engaging. Summarize first, and offer the longer version if the person wants to read more. Use bullet points, headings, and formatting to enhance readability."#;

/// Build the opening analysis prompt from the user's inputs and the
/// computed summary. This seeds the first turn of every chat session.
pub fn build_analysis_prompt(
    inputs: &[TransportInput],
    mix: &EnergyMix,
    summary: &FootprintSummary,
) -> String {
    format!(
        "{role}\n\n\
         **User's Input Data:**\n\
         - Number of Cars: {cars}\n\
         - Number of Passengers: {passengers}\n\
         - Number of Containers: {containers}\n\
         - Green Energy Mix: {solar}% Solar, {wind}% Wind, {hydro}% Hydro.\n\n\
         **Calculated Results:**\n\
         - CO2 Footprint (Before Green Energy): {total_co2:.2} kg CO2\n\
         - CO2 Footprint (After applying Green Energy Mix): {total_green:.2} kg CO2\n\
         - CO2 Reduction Achieved: {reduction:.2}%\n\n\
         {task}",
        role = ANALYST_ROLE_PROMPT,
        cars = quantity_of(inputs, TransportKind::Car),
        passengers = quantity_of(inputs, TransportKind::Passenger),
        containers = quantity_of(inputs, TransportKind::Container),
        solar = mix.solar,
        wind = mix.wind,
        hydro = mix.hydro,
        total_co2 = summary.total_co2,
        total_green = summary.total_green,
        reduction = summary.reduction_percent,
        task = ANALYST_TASK_PROMPT,
    )
}

fn quantity_of(inputs: &[TransportInput], kind: TransportKind) -> u64 {
    inputs
        .iter()
        .find(|input| input.kind == kind)
        .map(|input| input.quantity)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::service::compute_emissions;

    #[test]
    fn test_prompt_contains_computed_figures() {
        let inputs = vec![
            TransportInput::new(TransportKind::Car, 10),
            TransportInput::new(TransportKind::Container, 2),
        ];
        let mix = EnergyMix::new(100.0, 0.0, 0.0);
        let summary = compute_emissions(&inputs, &mix);

        let prompt = build_analysis_prompt(&inputs, &mix, &summary);

        assert!(prompt.contains("Number of Cars: 10"));
        assert!(prompt.contains("Number of Passengers: 0"));
        assert!(prompt.contains("Number of Containers: 2"));
        assert!(prompt.contains("100% Solar"));
        assert!(prompt.contains(&format!("{:.2} kg CO2", summary.total_co2)));
        assert!(prompt.contains(&format!("{:.2}%", summary.reduction_percent)));
    }

    #[test]
    fn test_prompt_starts_with_role() {
        let inputs = vec![TransportInput::new(TransportKind::Car, 1)];
        let mix = EnergyMix::none();
        let summary = compute_emissions(&inputs, &mix);

        let prompt = build_analysis_prompt(&inputs, &mix, &summary);
        assert!(prompt.starts_with(ANALYST_ROLE_PROMPT));
        assert!(prompt.ends_with("enhance readability."));
    }
}
