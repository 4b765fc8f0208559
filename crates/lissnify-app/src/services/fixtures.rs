//! Built-in content for offline mode and the "How It Works" walkthrough

use lissnify_core::prelude::*;
use lissnify_core::{Category, Listener, Step, Testimonial, UserSummary};

use super::data_source::DataSource;

/// Content source that never touches the network
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDataSource;

impl DataSource for StaticDataSource {
    fn label(&self) -> String {
        "offline".to_string()
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        Ok(categories())
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>> {
        Ok(testimonials())
    }

    async fn listeners(&self) -> Result<Vec<Listener>> {
        Ok(listeners())
    }

    async fn steps(&self) -> Result<Vec<Step>> {
        Ok(steps())
    }
}

pub fn categories() -> Vec<Category> {
    const DATA: [(&str, &str, &str, &str); 12] = [
        ("Breakup", "breakup", "Going through heartbreak? Let someone help you heal and move forward.", "Healing takes time, and that's okay"),
        ("Relationship Issues", "relationship-issues", "Navigating relationship challenges? Get guidance from experienced listeners.", "Healthy relationships are possible"),
        ("Loneliness", "loneliness", "Feeling isolated and disconnected? You're not alone in feeling alone.", "Connection is closer than you think"),
        ("Career Stress", "career-stress", "Feeling overwhelmed by life's pressures? Find support and coping strategies.", "Your worth isn't your job title"),
        ("Anxiety", "anxiety", "Feeling overwhelmed by worry and fear? Connect with someone who understands.", "One breath at a time"),
        ("Divorce Support", "divorce-support", "Going through a divorce or separation? Find comfort, guidance, and strength to heal.", "A new chapter can begin"),
        ("Depression", "depression", "Feeling down and hopeless? You don't have to face this alone.", "Small steps still count"),
        ("Suicidal Thoughts", "suicidal-thoughts", "Having thoughts of self-harm? Please reach out immediately. You matter.", "You matter, right now"),
        ("Trauma", "trauma", "Dealing with past trauma? Find a safe space to process and heal.", "Safety first, always"),
        ("Grief & Loss", "grief-loss", "Processing loss and grief? Find compassionate support during this difficult time.", "Grief is love with nowhere to go"),
        ("Addiction Recovery", "addiction-recovery", "Struggling with addiction? Find support and resources for your recovery journey.", "Every day sober is a win"),
        ("Eating Disorders", "eating-disorders", "Struggling with food and body image? Find understanding and support.", "Your body deserves kindness"),
    ];

    DATA.iter()
        .enumerate()
        .map(|(i, (name, slug, description, support))| Category {
            id: i as u64 + 1,
            name: name.to_string(),
            description: description.to_string(),
            icon: None,
            support_text: support.to_string(),
            slug: Some(slug.to_string()),
        })
        .collect()
}

pub fn testimonials() -> Vec<Testimonial> {
    const DATA: [(&str, &str, &str); 6] = [
        ("Sarah M.", "Community Member", "I never thought I'd find people who truly understood my anxiety until I joined this community. For the first time in years, I don't feel alone in my struggles."),
        ("Michael R.", "Peer Mentor", "The gentle guidance and non-judgmental support I received here helped me through my darkest days. I'm now mentoring others and giving back to this beautiful community."),
        ("Elena K.", "Wellness Advocate", "This platform didn't just help me manage my depression, it taught me that healing is possible and that I deserve happiness. The community became my second family."),
        ("David L.", "Recovery Journey", "I was skeptical about online support, but the warmth and authenticity here changed everything. I've learned to be kinder to myself and found my voice again."),
        ("Priya S.", "Survivor & Thriver", "After years of therapy, this community gave me something different: hope, connection, and the courage to believe in my own strength. I'm forever grateful."),
        ("James W.", "Community Champion", "The 24/7 support and understanding ears helped me through my crisis moments. Today, I'm not just surviving, I'm truly living and loving life again."),
    ];

    DATA.iter()
        .enumerate()
        .map(|(i, (name, role, feedback))| Testimonial {
            id: i as u64 + 1,
            name: name.to_string(),
            role: Some(role.to_string()),
            rating: 5,
            feedback: feedback.to_string(),
            created_at: None,
            image: None,
        })
        .collect()
}

pub fn steps() -> Vec<Step> {
    const DATA: [(&str, &str, &str); 6] = [
        ("Sign Up & Join Safely", "Create your account with just a few clicks. Your privacy and safety are our top priority from the very first step.", "Quick, private signup gets you started in under 2 minutes."),
        ("Choose Your Challenge", "Select what you're going through from thoughtfully curated categories. Whether it's heartbreak, career stress, or family issues, we understand.", "Clear categories make it easy to find the right support."),
        ("Share Your Heart", "Express your feelings freely in a safe, judgment-free space. Tell your story at your own pace. Every word matters.", "Safe space to be vulnerable without fear of judgment."),
        ("Meet Your Perfect Match", "Our thoughtful matching connects you with someone who has walked a similar path and found their way through the darkness.", "Matched with someone who truly understands your journey."),
        ("Connect & Feel Heard", "Start meaningful conversations through secure chat or voice calls. Your listener provides empathy, not judgment.", "100% private conversations with complete confidentiality."),
        ("Heal & Feel Supported", "Experience the relief of being truly understood. Feel lighter, supported, and ready to take the next step in your healing journey.", "You're not alone. Feel supported every step of the way."),
    ];

    DATA.iter()
        .enumerate()
        .map(|(i, (title, description, benefit))| Step {
            number: i as u8 + 1,
            title: title.to_string(),
            description: description.to_string(),
            benefit: Some(benefit.to_string()),
        })
        .collect()
}

pub fn listeners() -> Vec<Listener> {
    const DATA: [(&str, &str, &str, f32, &[&str]); 9] = [
        ("Sarah Johnson", "I've healed from a tough breakup and want to help others rediscover their strength and self-worth.", "English", 4.9, &["Breakup"]),
        ("Michael Chen", "Career transitions can be overwhelming. I'm here to guide you through professional challenges.", "English", 4.8, &["Career Stress"]),
        ("Emma Rodriguez", "Having navigated through depression, I understand the journey and can offer compassionate support.", "Spanish", 4.9, &["Depression"]),
        ("David Kim", "Anxiety doesn't have to control your life. Let's work together on coping strategies that work.", "English", 4.7, &["Anxiety"]),
        ("Lisa Thompson", "Building healthy relationships starts with understanding yourself. I'm here to help you navigate.", "English", 4.8, &["Relationship Issues"]),
        ("James Wilson", "Stress management is a skill that can be learned. Let me help you find your balance.", "English", 4.6, &["Career Stress", "Anxiety"]),
        ("Sophia Patel", "Every ending is a new beginning. I'll help you process your emotions and move forward.", "Hindi", 4.9, &["Breakup", "Divorce Support"]),
        ("Ryan Martinez", "Career burnout is real. Let's explore strategies to reignite your passion and purpose.", "Spanish", 4.7, &["Career Stress"]),
        ("Amanda Foster", "Anxiety can feel overwhelming, but you're not alone. I'm here to listen and support you.", "English", 4.8, &["Anxiety", "Loneliness"]),
    ];

    DATA.iter()
        .enumerate()
        .map(|(i, (name, description, language, rating, prefs))| Listener {
            id: i as u64 + 1,
            full_name: name.to_string(),
            description: description.to_string(),
            language: language.to_string(),
            rating: *rating,
            user: Some(UserSummary {
                u_id: Some(100 + i as u64),
                full_name: name.to_string(),
                email: None,
                profile_image: None,
            }),
            preferences: prefs.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}
