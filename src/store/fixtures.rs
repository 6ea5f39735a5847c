use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use super::dataset::{Dataset, Record};
use super::traits::{DataProvider, RecordProvider};
use crate::models::{
    Activity, ActivityBadge, ActivityKind, AgentPerformance, Board, ContentEngagement, ContentScore,
    ContentStyle, DailyLeads, Engagement, GeneratedContent, Health, Integration, Interaction,
    InteractionKind, Lead, LeadStatus, ListingStatus, MetricCard, MonthlyPerformance, Price,
    Property, Service, SettingEntry, SettingsTab, Source, SourcePerformance, SourceShare,
    SystemComponent, Tone, Trend, UsageCounter, WeeklyActivity,
};

/// Serves the built-in demo data
#[derive(Debug, Clone)]
pub struct FixtureProvider {
    dataset: Dataset,
}

impl FixtureProvider {
    pub fn new() -> Self {
        Self::with_dataset(dataset())
    }

    /// Serve `dataset` instead of the built-in records
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl Default for FixtureProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordProvider<T> for FixtureProvider {
    async fn list(&self) -> Result<Vec<T>> {
        Ok(T::select(&self.dataset).to_vec())
    }
}

impl DataProvider for FixtureProvider {
    fn source_name(&self) -> &str {
        "built-in fixtures"
    }
}

/// Fixture timestamps are literals; an invalid one is a programming error.
fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("fixture timestamp is a valid UTC instant")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// The complete demo dataset
pub fn dataset() -> Dataset {
    info!("📋 Using built-in demo data");

    Dataset {
        leads: leads(),
        properties: properties(),
        services: services(),
        integrations: integrations(),
        system_status: system_status(),
        metrics: metrics(),
        lead_trend: lead_trend(),
        content_performance: content_performance(),
        source_distribution: source_distribution(),
        recent_activity: recent_activity(),
        monthly_performance: monthly_performance(),
        content_engagement: content_engagement(),
        source_performance: source_performance(),
        weekly_activity: weekly_activity(),
        agent_performance: agent_performance(),
        settings: settings(),
    }
}

fn interaction(kind: InteractionKind, message: &str, time: DateTime<Utc>) -> Interaction {
    Interaction {
        kind,
        message: message.to_string(),
        time,
    }
}

pub fn leads() -> Vec<Lead> {
    vec![
        Lead {
            id: 1,
            name: "Sarah Chen".to_string(),
            email: "sarah.chen@email.com".to_string(),
            phone: "+852 9123 4567".to_string(),
            source: "Instagram DM".to_string(),
            status: LeadStatus::Hot,
            score: 95,
            interested_property: "Modern 2BR Apartment in Central".to_string(),
            budget: "40000-50000".to_string(),
            assigned_agent: Some("Michael Wong".to_string()),
            last_contact: ts(2024, 1, 15, 14, 30),
            created_at: ts(2024, 1, 15, 10, 15),
            interactions: vec![
                interaction(InteractionKind::Dm, "Interested in the Central apartment", ts(2024, 1, 15, 10, 15)),
                interaction(InteractionKind::Call, "Initial consultation call", ts(2024, 1, 15, 11, 30)),
                interaction(InteractionKind::Email, "Sent property details and viewing options", ts(2024, 1, 15, 14, 30)),
            ],
            notes: "Very interested, looking to move in next month. Prefers modern apartments with good transport links.".to_string(),
        },
        Lead {
            id: 2,
            name: "David Liu".to_string(),
            email: "david.liu@company.com".to_string(),
            phone: "+852 9876 5432".to_string(),
            source: "WhatsApp".to_string(),
            status: LeadStatus::Warm,
            score: 78,
            interested_property: "Luxury 3BR Penthouse in Mid-Levels".to_string(),
            budget: "80000-100000".to_string(),
            assigned_agent: Some("Lisa Zhang".to_string()),
            last_contact: ts(2024, 1, 14, 16, 45),
            created_at: ts(2024, 1, 14, 9, 20),
            interactions: vec![
                interaction(InteractionKind::Whatsapp, "Inquiry about penthouse availability", ts(2024, 1, 14, 9, 20)),
                interaction(InteractionKind::Call, "Discussed requirements and budget", ts(2024, 1, 14, 16, 45)),
            ],
            notes: "Expatriate executive, flexible on price but specific about location and amenities.".to_string(),
        },
        Lead {
            id: 3,
            name: "Emily Wong".to_string(),
            email: "emily.wong@gmail.com".to_string(),
            phone: "+852 9555 1234".to_string(),
            source: "Instagram Comment".to_string(),
            status: LeadStatus::Cold,
            score: 45,
            interested_property: "Cozy Studio in Causeway Bay".to_string(),
            budget: "25000-30000".to_string(),
            assigned_agent: None,
            last_contact: ts(2024, 1, 13, 12, 0),
            created_at: ts(2024, 1, 13, 12, 0),
            interactions: vec![interaction(
                InteractionKind::Comment,
                "Asked about studio availability",
                ts(2024, 1, 13, 12, 0),
            )],
            notes: "First-time renter, needs guidance on rental process.".to_string(),
        },
        Lead {
            id: 4,
            name: "James Park".to_string(),
            email: "james.park@tech.com".to_string(),
            phone: "+852 9333 7890".to_string(),
            source: "Instagram DM".to_string(),
            status: LeadStatus::Converted,
            score: 100,
            interested_property: "Spacious Family Home in Tai Koo".to_string(),
            budget: "50000-60000".to_string(),
            assigned_agent: Some("Michael Wong".to_string()),
            last_contact: ts(2024, 1, 12, 10, 30),
            created_at: ts(2024, 1, 10, 15, 45),
            interactions: vec![
                interaction(InteractionKind::Dm, "Family home inquiry", ts(2024, 1, 10, 15, 45)),
                interaction(InteractionKind::Viewing, "Property viewing scheduled", ts(2024, 1, 11, 14, 0)),
                interaction(InteractionKind::Contract, "Lease agreement signed", ts(2024, 1, 12, 10, 30)),
            ],
            notes: "Signed 2-year lease. Very satisfied with service.".to_string(),
        },
    ]
}

fn monthly(amount: u64) -> Price {
    Price {
        amount,
        currency: "HKD".to_string(),
        period: "month".to_string(),
    }
}

pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: 1,
            title: "Modern 2BR Apartment in Central".to_string(),
            location: "Central, Hong Kong Island".to_string(),
            price: monthly(45_000),
            bedrooms: 2,
            bathrooms: 2,
            area: 800,
            image: "/api/placeholder/400/300".to_string(),
            source: Source::Hse28,
            status: ListingStatus::Published,
            engagement: Engagement {
                views: 1250,
                likes: 89,
                comments: 12,
                shares: 5,
            },
            content: GeneratedContent {
                caption: "Stunning modern apartment in the heart of Central! ✨ This beautifully designed 2-bedroom unit offers breathtaking city views and premium finishes. Perfect for professionals seeking luxury living in Hong Kong's financial district. 🏙️ #CentralLiving #ModernApartment #HongKongRental".to_string(),
                hashtags: strings(&["#CentralLiving", "#ModernApartment", "#HongKongRental", "#LuxuryLiving", "#CityViews"]),
                style: ContentStyle::Engaging,
            },
            posted_at: Some(ts(2024, 1, 15, 10, 30)),
            scraped_at: ts(2024, 1, 15, 9, 15),
        },
        Property {
            id: 2,
            title: "Cozy Studio in Causeway Bay".to_string(),
            location: "Causeway Bay, Hong Kong Island".to_string(),
            price: monthly(28_000),
            bedrooms: 0,
            bathrooms: 1,
            area: 450,
            image: "/api/placeholder/400/300".to_string(),
            source: Source::Squarefoot,
            status: ListingStatus::Pending,
            engagement: Engagement::default(),
            content: GeneratedContent {
                caption: "Charming studio apartment in vibrant Causeway Bay! 🌟 Perfectly located near shopping and dining, this cozy space is ideal for young professionals. Efficient layout maximizes every square foot. 🏠 #CausewayBay #StudioApartment #ConvenientLiving".to_string(),
                hashtags: strings(&["#CausewayBay", "#StudioApartment", "#ConvenientLiving", "#YoungProfessionals"]),
                style: ContentStyle::Professional,
            },
            posted_at: None,
            scraped_at: ts(2024, 1, 15, 11, 45),
        },
        Property {
            id: 3,
            title: "Luxury 3BR Penthouse in Mid-Levels".to_string(),
            location: "Mid-Levels, Hong Kong Island".to_string(),
            price: monthly(85_000),
            bedrooms: 3,
            bathrooms: 3,
            area: 1200,
            image: "/api/placeholder/400/300".to_string(),
            source: Source::Centaline,
            status: ListingStatus::Published,
            engagement: Engagement {
                views: 2100,
                likes: 156,
                comments: 28,
                shares: 15,
            },
            content: GeneratedContent {
                caption: "Exclusive penthouse living in prestigious Mid-Levels! 🏙️ This magnificent 3-bedroom residence features panoramic harbor views, premium appliances, and elegant finishes throughout. Experience the pinnacle of Hong Kong luxury. ✨ #MidLevels #PenthouseLiving #LuxuryRental".to_string(),
                hashtags: strings(&["#MidLevels", "#PenthouseLiving", "#LuxuryRental", "#HarborViews", "#Exclusive"]),
                style: ContentStyle::Professional,
            },
            posted_at: Some(ts(2024, 1, 14, 16, 20)),
            scraped_at: ts(2024, 1, 14, 15, 30),
        },
        Property {
            id: 4,
            title: "Spacious Family Home in Tai Koo".to_string(),
            location: "Tai Koo, Hong Kong Island".to_string(),
            price: monthly(55_000),
            bedrooms: 3,
            bathrooms: 2,
            area: 950,
            image: "/api/placeholder/400/300".to_string(),
            source: Source::Hse28,
            status: ListingStatus::Draft,
            engagement: Engagement::default(),
            content: GeneratedContent {
                caption: "Perfect family home in peaceful Tai Koo! 🏡 This spacious 3-bedroom apartment offers comfort and convenience for growing families. Close to schools, parks, and MTR station. Your family's new chapter starts here! #TaiKoo #FamilyHome #SpaciousLiving".to_string(),
                hashtags: strings(&["#TaiKoo", "#FamilyHome", "#SpaciousLiving", "#FamilyFriendly", "#Convenient"]),
                style: ContentStyle::Casual,
            },
            posted_at: None,
            scraped_at: ts(2024, 1, 15, 12, 0),
        },
    ]
}

fn service(name: &str, status: Health, url: &str, last_update: DateTime<Utc>, version: &str, health: Health) -> Service {
    Service {
        name: name.to_string(),
        status,
        url: url.to_string(),
        last_update,
        version: version.to_string(),
        health,
    }
}

pub fn services() -> Vec<Service> {
    vec![
        service("28Hse Scraper", Health::Online, "https://28hse-scraper.render.com", ts(2024, 1, 15, 14, 30), "v1.2.3", Health::Healthy),
        service("Squarefoot Scraper", Health::Online, "https://squarefoot-scraper.render.com", ts(2024, 1, 15, 14, 25), "v1.2.1", Health::Healthy),
        service("AI Content Enrichment", Health::Online, "https://ai-enrichment.render.com", ts(2024, 1, 15, 14, 35), "v2.1.0", Health::Healthy),
        service("Property CRM", Health::Online, "https://property-crm.render.com", ts(2024, 1, 15, 14, 20), "v1.5.2", Health::Healthy),
        service("Analytics Service", Health::Warning, "https://analytics-service.render.com", ts(2024, 1, 15, 13, 45), "v1.0.8", Health::Degraded),
    ]
}

fn integration(name: &str, description: &str, usage: &[(&str, &str)]) -> Integration {
    Integration {
        name: name.to_string(),
        status: Health::Connected,
        description: description.to_string(),
        usage: usage
            .iter()
            .map(|(label, value)| UsageCounter {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect(),
    }
}

pub fn integrations() -> Vec<Integration> {
    vec![
        integration(
            "Make.com",
            "Automation workflows and data processing",
            &[("scenarios", "5"), ("last run", "Jan 15, 02:30 PM")],
        ),
        integration(
            "Instagram Business",
            "Content publishing and engagement tracking",
            &[("posts", "156"), ("followers", "2847")],
        ),
        integration(
            "WhatsApp Business",
            "Lead communication and customer support",
            &[("conversations", "89"), ("response rate", "94%")],
        ),
        integration(
            "OpenAI API",
            "AI content generation and text processing",
            &[("requests", "12450"), ("usage", "78%")],
        ),
        integration(
            "Cloudinary",
            "Image processing and storage",
            &[("images", "1234"), ("storage", "2.3GB")],
        ),
    ]
}

pub fn system_status() -> Vec<SystemComponent> {
    ["scrapers", "ai_enrichment", "crm", "analytics", "make_automation"]
        .into_iter()
        .map(|name| SystemComponent {
            name: name.to_string(),
            status: Health::Online,
        })
        .collect()
}

fn card(board: Board, title: &str, value: &str, delta: &str, trend: Trend, positive: bool) -> MetricCard {
    MetricCard {
        board,
        title: title.to_string(),
        value: value.to_string(),
        delta: delta.to_string(),
        trend,
        positive,
    }
}

pub fn metrics() -> Vec<MetricCard> {
    use Board::{Analytics, Dashboard};
    use Trend::{Down, Up};

    vec![
        card(Dashboard, "Total Leads", "1,247", "+12.5% from last week", Up, true),
        card(Dashboard, "Active Properties", "342", "+8.2% from last week", Up, true),
        card(Dashboard, "Conversion Rate", "24.8%", "-2.1% from last week", Down, false),
        card(Dashboard, "System Uptime", "99.9%", "+0.1% from last week", Up, true),
        card(Analytics, "Total Revenue", "HK$5.36M", "+18.2% from last month", Up, true),
        card(Analytics, "Conversion Rate", "25.4%", "+3.1% from last month", Up, true),
        card(Analytics, "Avg. Response Time", "4.2min", "-12% faster than last month", Down, true),
        card(Analytics, "Content Engagement", "8.7%", "+2.3% from last month", Up, true),
    ]
}

pub fn lead_trend() -> Vec<DailyLeads> {
    [("Mon", 12, 3), ("Tue", 19, 5), ("Wed", 15, 4), ("Thu", 22, 7), ("Fri", 28, 8), ("Sat", 35, 12), ("Sun", 31, 10)]
        .into_iter()
        .map(|(day, leads, conversions)| DailyLeads {
            day: day.to_string(),
            leads,
            conversions,
        })
        .collect()
}

pub fn content_performance() -> Vec<ContentScore> {
    [("Property Photos", 85), ("Collages", 92), ("Market News", 67), ("Agent Highlights", 74)]
        .into_iter()
        .map(|(name, engagement)| ContentScore {
            name: name.to_string(),
            engagement,
        })
        .collect()
}

pub fn source_distribution() -> Vec<SourceShare> {
    [("28Hse", 45, "#3B82F6"), ("Squarefoot", 35, "#10B981"), ("Centaline", 20, "#F59E0B")]
        .into_iter()
        .map(|(name, percent, color)| SourceShare {
            name: name.to_string(),
            percent,
            color: color.to_string(),
        })
        .collect()
}

fn activity(kind: ActivityKind, message: &str, time: &str, badge: ActivityBadge) -> Activity {
    Activity {
        kind,
        message: message.to_string(),
        time: time.to_string(),
        badge: Some(badge),
    }
}

pub fn recent_activity() -> Vec<Activity> {
    vec![
        activity(ActivityKind::Scrape, "New properties scraped from 28Hse", "2 minutes ago", ActivityBadge::Count(15)),
        activity(ActivityKind::Lead, "High-quality lead generated", "5 minutes ago", ActivityBadge::Score(95)),
        activity(ActivityKind::Post, "Instagram post published", "12 minutes ago", ActivityBadge::Engagement("2.3k views".to_string())),
        activity(ActivityKind::Conversion, "Lead converted to viewing", "18 minutes ago", ActivityBadge::Agent("Sarah Chen".to_string())),
        activity(ActivityKind::Ai, "Content enrichment completed", "25 minutes ago", ActivityBadge::Count(8)),
    ]
}

pub fn monthly_performance() -> Vec<MonthlyPerformance> {
    [
        ("Jan", 45, 12, 540_000),
        ("Feb", 52, 15, 675_000),
        ("Mar", 48, 11, 495_000),
        ("Apr", 61, 18, 810_000),
        ("May", 55, 16, 720_000),
        ("Jun", 67, 22, 990_000),
        ("Jul", 73, 25, 1_125_000),
    ]
    .into_iter()
    .map(|(month, leads, conversions, revenue)| MonthlyPerformance {
        month: month.to_string(),
        leads,
        conversions,
        revenue,
    })
    .collect()
}

pub fn content_engagement() -> Vec<ContentEngagement> {
    [
        ("Property Photos", 12_500, 890, 156, 45),
        ("Collages", 15_200, 1240, 203, 78),
        ("Market Updates", 8900, 567, 89, 23),
        ("Agent Stories", 6700, 445, 67, 12),
        ("Virtual Tours", 18_900, 1567, 234, 89),
    ]
    .into_iter()
    .map(|(name, views, likes, comments, shares)| ContentEngagement {
        name: name.to_string(),
        views,
        likes,
        comments,
        shares,
    })
    .collect()
}

pub fn source_performance() -> Vec<SourcePerformance> {
    [
        ("28Hse", 145, 67, 24.5, "#3B82F6"),
        ("Squarefoot", 112, 52, 28.1, "#10B981"),
        ("Centaline", 89, 38, 22.3, "#F59E0B"),
    ]
    .into_iter()
    .map(|(name, properties, leads, conversion, color)| SourcePerformance {
        name: name.to_string(),
        properties,
        leads,
        conversion,
        color: color.to_string(),
    })
    .collect()
}

pub fn weekly_activity() -> Vec<WeeklyActivity> {
    [
        ("Mon", 45, 12, 8, 15),
        ("Tue", 52, 14, 11, 18),
        ("Wed", 48, 13, 9, 16),
        ("Thu", 61, 16, 14, 22),
        ("Fri", 55, 15, 12, 20),
        ("Sat", 67, 18, 16, 25),
        ("Sun", 43, 11, 7, 13),
    ]
    .into_iter()
    .map(|(day, scrapes, posts, leads, responses)| WeeklyActivity {
        day: day.to_string(),
        scrapes,
        posts,
        leads,
        responses,
    })
    .collect()
}

pub fn agent_performance() -> Vec<AgentPerformance> {
    [
        ("Michael Wong", 45, 12, 26.7),
        ("Lisa Zhang", 38, 11, 28.9),
        ("Sarah Chen", 42, 9, 21.4),
        ("David Liu", 35, 8, 22.9),
    ]
    .into_iter()
    .map(|(name, leads, conversions, rate)| AgentPerformance {
        name: name.to_string(),
        leads,
        conversions,
        rate,
    })
    .collect()
}

pub fn settings() -> Vec<SettingEntry> {
    use SettingsTab::{Api, Automation, Notifications, Security};

    let mut rows: Vec<(SettingsTab, &str, &str, &str, Tone)> = vec![
        (Api, "API Configuration", "OpenAI API Key", "sk-••••••••••••••••••••••••••••••••••••••••", Tone::Neutral),
        (Api, "API Configuration", "Cloudinary Cloud Name", "property-agency-cloud", Tone::Neutral),
        (Api, "API Configuration", "Instagram Access Token", "IGQ••••••••••••••••••••••••••••••••••••••••", Tone::Neutral),
        (Api, "API Configuration", "WhatsApp Business Token", "EAA••••••••••••••••••••••••••••••••••••••••", Tone::Neutral),
        (Automation, "Scraping Schedule", "28Hse Scraper", "Every 2 hours", Tone::Neutral),
        (Automation, "Scraping Schedule", "Squarefoot Scraper", "Every 3 hours", Tone::Neutral),
        (Automation, "Scraping Schedule", "Centaline Scraper", "Every 4 hours", Tone::Neutral),
        (Automation, "Content Publishing", "Auto-publish new properties", "Enabled", Tone::Good),
        (Automation, "Content Publishing", "AI caption generation", "Enabled", Tone::Good),
        (Automation, "Content Publishing", "Image enhancement", "Enabled", Tone::Good),
        (Automation, "Lead Management", "Auto-assign leads", "Enabled", Tone::Good),
        (Automation, "Lead Management", "Lead scoring", "Enabled", Tone::Good),
        (Automation, "Lead Management", "Auto-responses", "Partial", Tone::Warn),
    ];

    for alert in ["Service downtime", "High-priority leads", "Scraping errors", "API rate limits", "Content moderation flags"] {
        rows.push((Notifications, "System Alerts", alert, "Enabled", Tone::Good));
    }
    for report in ["Daily summary", "Weekly analytics", "Monthly performance", "Lead conversion reports"] {
        rows.push((Notifications, "Performance Reports", report, "Enabled", Tone::Good));
    }

    rows.extend([
        (Security, "Access Control", "Two-factor authentication", "Enabled", Tone::Good),
        (Security, "Access Control", "API rate limiting", "Enabled", Tone::Good),
        (Security, "Access Control", "IP whitelist", "Partial", Tone::Warn),
        (Security, "Data Protection", "Data encryption", "AES-256", Tone::Good),
        (Security, "Data Protection", "Backup frequency", "Daily", Tone::Neutral),
        (Security, "Data Protection", "Data retention", "2 years", Tone::Neutral),
    ]);

    rows.into_iter()
        .map(|(tab, section, label, value, tone)| SettingEntry {
            tab,
            section: section.to_string(),
            label: label.to_string(),
            value: value.to_string(),
            tone,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_provider_lists_each_kind() {
        let provider = FixtureProvider::new();
        let leads: Vec<Lead> = provider.list().await.unwrap();
        let properties: Vec<Property> = provider.list().await.unwrap();
        let services: Vec<Service> = provider.list().await.unwrap();
        assert_eq!(leads.len(), 4);
        assert_eq!(properties.len(), 4);
        assert_eq!(services.len(), 5);
    }

    #[tokio::test]
    async fn injected_dataset_replaces_fixtures() {
        let mut custom = Dataset::default();
        custom.leads = leads().into_iter().take(1).collect();
        let provider = FixtureProvider::with_dataset(custom);

        let loaded = Dataset::load(&provider).await.unwrap();
        assert_eq!(loaded.leads.len(), 1);
        assert!(loaded.properties.is_empty());
    }

    #[tokio::test]
    async fn loading_through_the_provider_matches_the_fixtures() {
        let loaded = Dataset::load(&FixtureProvider::new()).await.unwrap();
        assert_eq!(loaded, dataset());
    }

    #[test]
    fn fixture_leads_cover_every_status() {
        let statuses: Vec<LeadStatus> = leads().iter().map(|lead| lead.status).collect();
        assert_eq!(statuses, LeadStatus::ALL.to_vec());
    }

    #[test]
    fn settings_cover_every_static_tab() {
        let all = settings();
        for tab in [SettingsTab::Api, SettingsTab::Automation, SettingsTab::Notifications, SettingsTab::Security] {
            assert!(all.iter().any(|entry| entry.tab == tab), "{tab:?}");
        }
        assert_eq!(all.iter().filter(|e| e.tab == SettingsTab::Notifications).count(), 9);
    }
}
