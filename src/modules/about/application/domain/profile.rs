//! Seed content for the profile singleton. Used exactly once, when the first
//! page render finds no row.

use crate::modules::about::application::ports::outgoing::about_store::NewAbout;

pub fn default_profile() -> NewAbout {
    NewAbout {
        name: "Abdulaziz Hamidjonov".to_string(),
        headline: "AI/ML & Backend Developer".to_string(),
        description: "Passionate AI/ML and Backend Developer specializing in Python, Django, \
                      and Telegram Bot development. Experienced in building scalable web \
                      applications, machine learning solutions, and automated systems."
            .to_string(),
        profile_image_url: None,
        resume_url: None,
        github_username: "abdulaziz-python".to_string(),
        telegram_username: "ablaze_coder".to_string(),
        blog_handle: "@fikrlog_all".to_string(),
        channel_handle: "@pythonnews_uzbekistan".to_string(),
        skills: [
            "Python", "Django", "DRF", "TensorFlow", "Aiogram", "Telebot", "PostgreSQL",
            "Git", "Docker", "AI/ML", "Payment Systems",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    }
}
