//! Renders a merged [`BusinessProfile`] into assistant instructions.
//!
//! Output is deterministic for a given profile: fields are emitted in a fixed
//! order, each in its own paragraph, followed by a closing block describing
//! tone and how to handle unknown information.

use crate::profile::BusinessProfile;

const PLACEHOLDER_NAME: &str = "the business";

const CLOSING_INSTRUCTIONS: &str = "Please be friendly, helpful, and professional when responding to customer inquiries. \
Always provide accurate information about the business and what it offers. \
When you don't know something specific, acknowledge it and offer to take a message or direct them to contact the business directly.";

/// Builds the system prompt for a profile.
///
/// Returns an empty string when the profile has no populated fields. The name
/// line is always present otherwise, falling back to "the business".
#[must_use]
pub fn synthesize_system_prompt(profile: &BusinessProfile) -> String {
    if profile.is_empty() {
        return String::new();
    }

    let name = profile
        .name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(PLACEHOLDER_NAME);

    let mut prompt = format!("You are an AI assistant for {name}. ");

    if let Some(description) = text(profile.description.as_deref()) {
        prompt.push_str(description);
        prompt.push(' ');
    }
    if let Some(categories) = list(profile.categories.as_deref()) {
        push_paragraph(
            &mut prompt,
            &format!("Business categories: {}.", categories.join(", ")),
        );
    }
    if let Some(year) = text(profile.year_established.as_deref()) {
        push_paragraph(&mut prompt, &format!("Established in {year}."));
    }
    if let Some(services) = list(profile.services.as_deref()) {
        push_paragraph(
            &mut prompt,
            &format!(
                "The business offers the following services: {}.",
                services.join(", ")
            ),
        );
    }
    if let Some(products) = list(profile.products.as_deref()) {
        push_paragraph(
            &mut prompt,
            &format!("Products offered: {}.", products.join(", ")),
        );
    }
    if let Some(hours) = list(profile.hours.as_deref()) {
        push_paragraph(
            &mut prompt,
            &format!("Business hours:\n{}.", hours.join("\n")),
        );
    }
    if let Some(address) = text(profile.address.as_deref()) {
        push_paragraph(
            &mut prompt,
            &format!("The business is located at: {address}."),
        );
    }
    if let Some(phone) = text(profile.phone.as_deref()) {
        push_paragraph(&mut prompt, &format!("Phone number: {phone}."));
    }
    if let Some(email) = text(profile.email.as_deref()) {
        push_paragraph(&mut prompt, &format!("Email: {email}."));
    }
    if let Some(website) = text(profile.website.as_deref()) {
        push_paragraph(&mut prompt, &format!("Website: {website}."));
    }
    if let Some(rating) = text(profile.rating.as_deref()) {
        push_paragraph(
            &mut prompt,
            &format!("The business has a rating of {rating} out of 5."),
        );
    }
    if let Some(reviews) = list(profile.reviews.as_deref()) {
        let quoted: String = reviews
            .iter()
            .map(|review| format!("\"{}\"\n", review.trim()))
            .collect();
        prompt.push_str("\n\nCustomer reviews:\n");
        prompt.push_str(&quoted);
    }

    push_paragraph(&mut prompt, CLOSING_INSTRUCTIONS);
    prompt
}

fn push_paragraph(prompt: &mut String, paragraph: &str) {
    if !prompt.ends_with('\n') {
        prompt.push_str("\n\n");
    } else if !prompt.ends_with("\n\n") {
        prompt.push('\n');
    }
    prompt.push_str(paragraph);
    prompt.push(' ');
}

fn text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn list(values: Option<&[String]>) -> Option<&[String]> {
    values.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
