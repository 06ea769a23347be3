//! The marketing home page.
//!
//! Every link on the page is resolved through [`UrlFor`](common::UrlFor)
//! before any markup is produced, so an unresolvable route aborts the render
//! instead of emitting a dead link.

use maud::{Markup, html};
use model::Course;
use tracing::{debug, instrument, trace};

use super::layout;
use super::{RenderContext, Text};
use crate::error::PageError;
use crate::routes;

/// Auto-advance interval of the testimonial carousel.
pub const TESTIMONIAL_INTERVAL_MS: u32 = 5000;

const PAGE_TITLE: Text = Text::new("home_page_title", "Ficore Africa - Personal Finance Tools");

const HERO_TITLE: Text = Text::new("home_hero_title", "Take Control of Your Finances");
const HERO_SUBTITLE: Text = Text::new(
    "home_hero_subtitle",
    "Simple, practical tools built for how Africans earn, spend and save. Check your financial health, plan your budget and grow your wealth in one place.",
);
const HERO_CTA: Text = Text::new("home_hero_cta", "Check Your Financial Health");

const JOURNEY_TITLE: Text = Text::new("home_journey_title", "Your Financial Journey");
const JOURNEY_SUBTITLE: Text =
    Text::new("home_journey_subtitle", "Four steps to financial confidence");

const TOOLS_TITLE: Text = Text::new("home_tools_title", "Explore Our Tools");
const START: Text = Text::new("general_start", "Start");

const COURSE_START: Text = Text::new("learning_hub_start_course", "Start course");
const COURSE_PREMIUM: Text = Text::new("learning_hub_premium_course", "Premium course");
const COURSE_FREE: Text = Text::new("learning_hub_free_course", "Free course");
const NO_COURSES: Text = Text::new(
    "learning_hub_no_courses",
    "No courses are available right now. Check back soon.",
);
const VIEW_ALL_COURSES: Text = Text::new("learning_hub_view_all_courses", "View all courses");

const FEATURES_TITLE: Text = Text::new("home_features_title", "Stay Informed");
const WHY_TITLE: Text = Text::new("home_why_title", "Why Choose Ficore Africa?");
const TESTIMONIALS_TITLE: Text = Text::new("home_testimonials_title", "What Our Users Say");
const PREVIOUS: Text = Text::new("general_previous", "Previous");
const NEXT: Text = Text::new("general_next", "Next");
const FAQ_TITLE: Text = Text::new("home_faq_title", "Frequently Asked Questions");

const CLOSING_TITLE: Text = Text::new("home_closing_title", "Not sure where to start?");
const CLOSING_TEXT: Text = Text::new(
    "home_closing_text",
    "Take our financial personality quiz and get recommendations that fit you.",
);
const CLOSING_CTA: Text = Text::new("home_closing_cta", "Take the Quiz");

const QUIZ_PARAMS: &[(&str, &str)] = &[("course_id", "financial_quiz")];

/// One of the four numbered steps linking to a tool group.
#[derive(Debug, Clone, Copy)]
pub struct JourneyStep {
    pub number: u8,
    pub anchor: &'static str,
    pub panel_id: &'static str,
    pub title: Text,
    pub description: Text,
}

pub static JOURNEY_STEPS: [JourneyStep; 4] = [
    JourneyStep {
        number: 1,
        anchor: "financial-assessment",
        panel_id: "assessmentCollapse",
        title: Text::new("home_journey_step1_title", "Assess"),
        description: Text::new("home_journey_step1_desc", "Understand where you stand today."),
    },
    JourneyStep {
        number: 2,
        anchor: "planning-tools",
        panel_id: "planningCollapse",
        title: Text::new("home_journey_step2_title", "Plan"),
        description: Text::new(
            "home_journey_step2_desc",
            "Set budgets, manage bills and build a safety net.",
        ),
    },
    JourneyStep {
        number: 3,
        anchor: "wealth-tracking",
        panel_id: "trackingCollapse",
        title: Text::new("home_journey_step3_title", "Track"),
        description: Text::new("home_journey_step3_desc", "Watch your net worth grow over time."),
    },
    JourneyStep {
        number: 4,
        anchor: "learning-growth",
        panel_id: "growthCollapse",
        title: Text::new("home_journey_step4_title", "Grow"),
        description: Text::new(
            "home_journey_step4_desc",
            "Build your knowledge with practical courses.",
        ),
    },
];

/// A tool card before its link has been resolved.
#[derive(Debug, Clone, Copy)]
pub struct ToolCard {
    pub title: Text,
    pub description: Text,
    pub route: &'static str,
    pub params: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, Copy)]
pub enum GroupBody {
    Tools(&'static [ToolCard]),
    Courses,
}

/// A collapsible group of tools. `expanded` is the state the page is served in.
#[derive(Debug, Clone, Copy)]
pub struct ToolGroup {
    pub anchor: &'static str,
    pub panel_id: &'static str,
    pub title: Text,
    pub expanded: bool,
    pub body: GroupBody,
}

const ASSESSMENT_TOOLS: &[ToolCard] = &[
    ToolCard {
        title: Text::new("financial_health_title", "Financial Health Score"),
        description: Text::new(
            "financial_health_desc",
            "Get a quick score of your overall financial wellbeing.",
        ),
        route: routes::FINANCIAL_HEALTH,
        params: &[],
    },
    ToolCard {
        title: Text::new("quiz_title", "Financial Personality Quiz"),
        description: Text::new("quiz_desc", "Discover your money habits and how to improve them."),
        route: routes::QUIZ,
        params: QUIZ_PARAMS,
    },
];

const PLANNING_TOOLS: &[ToolCard] = &[
    ToolCard {
        title: Text::new("budget_title", "Budget Planner"),
        description: Text::new("budget_desc", "Plan your monthly income and expenses."),
        route: routes::BUDGET,
        params: &[],
    },
    ToolCard {
        title: Text::new("bill_title", "Bill Manager"),
        description: Text::new("bill_desc", "Keep track of upcoming bills and never miss a payment."),
        route: routes::BILL,
        params: &[],
    },
    ToolCard {
        title: Text::new("emergency_fund_title", "Emergency Fund Calculator"),
        description: Text::new(
            "emergency_fund_desc",
            "Work out how much to set aside for unexpected expenses.",
        ),
        route: routes::EMERGENCY_FUND,
        params: &[],
    },
];

const TRACKING_TOOLS: &[ToolCard] = &[
    ToolCard {
        title: Text::new("net_worth_title", "Net Worth Calculator"),
        description: Text::new("net_worth_desc", "See the full picture of what you own and owe."),
        route: routes::NET_WORTH,
        params: &[],
    },
    ToolCard {
        title: Text::new("dashboard_title", "My Dashboard"),
        description: Text::new("dashboard_desc", "Review all your results and progress in one view."),
        route: routes::DASHBOARD,
        params: &[],
    },
];

pub static TOOL_GROUPS: [ToolGroup; 4] = [
    ToolGroup {
        anchor: "financial-assessment",
        panel_id: "assessmentCollapse",
        title: Text::new("home_group_assessment", "Financial Assessment"),
        expanded: true,
        body: GroupBody::Tools(ASSESSMENT_TOOLS),
    },
    ToolGroup {
        anchor: "planning-tools",
        panel_id: "planningCollapse",
        title: Text::new("home_group_planning", "Planning Tools"),
        expanded: false,
        body: GroupBody::Tools(PLANNING_TOOLS),
    },
    ToolGroup {
        anchor: "wealth-tracking",
        panel_id: "trackingCollapse",
        title: Text::new("home_group_tracking", "Wealth Tracking"),
        expanded: false,
        body: GroupBody::Tools(TRACKING_TOOLS),
    },
    ToolGroup {
        anchor: "learning-growth",
        panel_id: "growthCollapse",
        title: Text::new("home_group_learning", "Learning & Growth"),
        expanded: false,
        body: GroupBody::Courses,
    },
];

static FEATURE_CARDS: [ToolCard; 2] = [
    ToolCard {
        title: Text::new("news_title", "Financial News"),
        description: Text::new("news_desc", "Stay informed with the latest financial news and tips."),
        route: routes::NEWS,
        params: &[],
    },
    ToolCard {
        title: Text::new("tax_title", "Taxation"),
        description: Text::new("tax_desc", "Calculate your taxes and understand your obligations."),
        route: routes::TAXATION,
        params: &[],
    },
];

static WHY_CHOOSE_US: [Text; 4] = [
    Text::new("home_why_local", "Built for African financial realities"),
    Text::new("home_why_languages", "Available in English and Hausa"),
    Text::new("home_why_free", "Free tools with no hidden charges"),
    Text::new("home_why_private", "Your data stays private and secure"),
];

struct Testimonial {
    quote: Text,
    author: &'static str,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: Text::new(
            "home_testimonial_1",
            "Ficore helped me finally stick to a budget. I now save every month.",
        ),
        author: "Aisha M., Kano",
    },
    Testimonial {
        quote: Text::new(
            "home_testimonial_2",
            "The emergency fund calculator showed me exactly what I needed to set aside.",
        ),
        author: "Chinedu O., Lagos",
    },
    Testimonial {
        quote: Text::new(
            "home_testimonial_3",
            "Learning in Hausa made the courses easy to follow.",
        ),
        author: "Musa B., Kaduna",
    },
];

const FAQ_QUESTION: Text = Text::new("home_faq_free_question", "Is Ficore Africa free to use?");
const FAQ_ANSWER: Text = Text::new(
    "home_faq_free_answer",
    "Yes. Every tool on this page is free. Some advanced courses are marked as premium.",
);

/// Marketing line shown under a course title, keyed on the course id.
///
/// Courses missing from this table are listed with their title only.
pub fn course_blurb(course_id: &str) -> Option<Text> {
    match course_id {
        "budgeting_101" => Some(Text::new(
            "learning_hub_course_budgeting_101_desc",
            "Learn the basics of creating and managing a budget.",
        )),
        "financial_quiz" => Some(Text::new(
            "learning_hub_course_financial_quiz_desc",
            "Test your financial knowledge with our interactive quiz.",
        )),
        "savings_basics" => Some(Text::new(
            "learning_hub_course_savings_basics_desc",
            "Discover simple strategies to grow your savings.",
        )),
        _ => None,
    }
}

struct ResolvedCard {
    title: String,
    description: String,
    href: String,
}

struct CourseEntry {
    id: String,
    title: String,
    blurb: Option<String>,
    access: String,
    href: String,
}

enum CourseListing {
    Entries(Vec<CourseEntry>),
    Empty { message: String, view_all_href: String },
}

enum ResolvedBody {
    Tools(Vec<ResolvedCard>),
    Courses(CourseListing),
}

fn resolve_card(ctx: &RenderContext<'_>, card: &ToolCard) -> Result<ResolvedCard, PageError> {
    Ok(ResolvedCard {
        title: ctx.tr(card.title),
        description: ctx.tr(card.description),
        href: ctx.urls.url_for(card.route, card.params)?,
    })
}

fn resolve_courses(ctx: &RenderContext<'_>) -> Result<CourseListing, PageError> {
    let courses: &[Course] = ctx.courses.unwrap_or_default();
    if courses.is_empty() {
        debug!("No courses supplied, rendering fallback");
        return Ok(CourseListing::Empty {
            message: ctx.tr(NO_COURSES),
            view_all_href: ctx.urls.url_for(routes::LEARNING_HUB, &[])?,
        });
    }

    let entries = courses
        .iter()
        .map(|course| -> Result<CourseEntry, PageError> {
            trace!(course_id = %course.id, "resolving course entry");
            Ok(CourseEntry {
                id: course.id.clone(),
                title: ctx.t.t(&course.title_key, &course.title_en),
                blurb: course_blurb(&course.id).map(|text| ctx.tr(text)),
                access: ctx.tr(if course.is_premium { COURSE_PREMIUM } else { COURSE_FREE }),
                href: ctx
                    .urls
                    .url_for(routes::LEARNING_HUB, &[("course_id", course.id.as_str())])?,
            })
        })
        .collect::<Result<Vec<_>, PageError>>()?;
    Ok(CourseListing::Entries(entries))
}

fn resolve_group(ctx: &RenderContext<'_>, group: &ToolGroup) -> Result<ResolvedBody, PageError> {
    match group.body {
        GroupBody::Tools(cards) => Ok(ResolvedBody::Tools(
            cards
                .iter()
                .map(|card| resolve_card(ctx, card))
                .collect::<Result<Vec<_>, _>>()?,
        )),
        GroupBody::Courses => Ok(ResolvedBody::Courses(resolve_courses(ctx)?)),
    }
}

/// Renders the home page document.
#[instrument(skip_all, fields(locale = %ctx.locale))]
pub fn render_home(ctx: &RenderContext<'_>) -> Result<Markup, PageError> {
    let hero_href = ctx.urls.url_for(routes::FINANCIAL_HEALTH, &[])?;
    let quiz_href = ctx.urls.url_for(routes::QUIZ, QUIZ_PARAMS)?;
    let groups = TOOL_GROUPS
        .iter()
        .map(|group| -> Result<_, PageError> { Ok((group, resolve_group(ctx, group)?)) })
        .collect::<Result<Vec<_>, PageError>>()?;
    let features = FEATURE_CARDS
        .iter()
        .map(|card| resolve_card(ctx, card))
        .collect::<Result<Vec<_>, _>>()?;
    let start = ctx.tr(START);

    let body = html! {
        section class="hero bg-primary text-white py-5" {
            div class="container text-center" {
                h1 class="display-5 fw-bold" { (ctx.tr(HERO_TITLE)) }
                p class="lead" { (ctx.tr(HERO_SUBTITLE)) }
                a class="btn btn-light btn-lg" href=(hero_href) { (ctx.tr(HERO_CTA)) }
            }
        }

        section class="journey container py-5" {
            h2 class="text-center" { (ctx.tr(JOURNEY_TITLE)) }
            p class="text-center text-muted" { (ctx.tr(JOURNEY_SUBTITLE)) }
            div class="row g-3" {
                @for step in &JOURNEY_STEPS {
                    div class="col-6 col-md-3" {
                        a class="journey-step card h-100 text-decoration-none" href={ "#" (step.anchor) } data-collapse-target=(step.panel_id) {
                            div class="card-body text-center" {
                                span class="badge rounded-pill bg-primary" { (step.number) }
                                h3 class="h5 mt-2" { (ctx.tr(step.title)) }
                                p class="small text-muted mb-0" { (ctx.tr(step.description)) }
                            }
                        }
                    }
                }
            }
        }

        section class="tools container py-5" {
            h2 class="text-center mb-4" { (ctx.tr(TOOLS_TITLE)) }
            div class="accordion" id="toolsAccordion" {
                @for (group, resolved) in &groups {
                    div class="accordion-item" id=(group.anchor) {
                        h3 class="accordion-header" {
                            button class=(if group.expanded { "accordion-button" } else { "accordion-button collapsed" })
                                type="button"
                                data-bs-toggle="collapse"
                                data-bs-target={ "#" (group.panel_id) }
                                aria-expanded=(if group.expanded { "true" } else { "false" })
                                aria-controls=(group.panel_id) {
                                (ctx.tr(group.title))
                            }
                        }
                        div id=(group.panel_id) class=(if group.expanded { "accordion-collapse collapse show" } else { "accordion-collapse collapse" }) {
                            div class="accordion-body" {
                                @match resolved {
                                    ResolvedBody::Tools(cards) => {
                                        div class="row g-3" {
                                            @for card in cards {
                                                (tool_card(card, &start))
                                            }
                                        }
                                    }
                                    ResolvedBody::Courses(listing) => {
                                        (course_listing(ctx, listing))
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        section class="features container py-5" {
            h2 class="text-center mb-4" { (ctx.tr(FEATURES_TITLE)) }
            div class="row g-3" {
                @for card in &features {
                    (tool_card(card, &start))
                }
            }
        }

        section class="why-us bg-light py-5" {
            div class="container" {
                h2 class="text-center mb-4" { (ctx.tr(WHY_TITLE)) }
                ul class="list-unstyled row g-2" {
                    @for reason in &WHY_CHOOSE_US {
                        li class="col-md-6" { "✓ " (ctx.tr(*reason)) }
                    }
                }
            }
        }

        section class="testimonials container py-5" {
            h2 class="text-center mb-4" { (ctx.tr(TESTIMONIALS_TITLE)) }
            div id="testimonialCarousel" class="testimonial-carousel text-center" data-interval=(TESTIMONIAL_INTERVAL_MS) {
                @for (index, testimonial) in TESTIMONIALS.iter().enumerate() {
                    blockquote class=(if index == 0 { "testimonial active" } else { "testimonial" }) data-testimonial=(index) {
                        p class="fs-5" { "“" (ctx.tr(testimonial.quote)) "”" }
                        footer class="blockquote-footer" { (testimonial.author) }
                    }
                }
                button type="button" class="btn btn-outline-primary me-2" data-carousel-prev { (ctx.tr(PREVIOUS)) }
                button type="button" class="btn btn-outline-primary" data-carousel-next { (ctx.tr(NEXT)) }
            }
        }

        section class="faq container py-5" {
            h2 class="text-center mb-4" { (ctx.tr(FAQ_TITLE)) }
            details class="faq-item" {
                summary { (ctx.tr(FAQ_QUESTION)) }
                p { (ctx.tr(FAQ_ANSWER)) }
            }
        }

        section class="closing-cta bg-primary text-white py-5" {
            div class="container text-center" {
                h2 { (ctx.tr(CLOSING_TITLE)) }
                p class="lead" { (ctx.tr(CLOSING_TEXT)) }
                a class="btn btn-light btn-lg" href=(quiz_href) { (ctx.tr(CLOSING_CTA)) }
            }
        }
    };

    debug!("Rendered home page");
    Ok(layout::page(ctx, &ctx.tr(PAGE_TITLE), body))
}

fn tool_card(card: &ResolvedCard, start: &str) -> Markup {
    html! {
        div class="col-md-6 col-lg-4" {
            div class="card tool-card h-100" {
                div class="card-body d-flex flex-column" {
                    h4 class="card-title h5" { (card.title) }
                    p class="card-text" { (card.description) }
                    a class="btn btn-primary mt-auto" href=(card.href) { (start) }
                }
            }
        }
    }
}

fn course_listing(ctx: &RenderContext<'_>, listing: &CourseListing) -> Markup {
    match listing {
        CourseListing::Entries(entries) => html! {
            ul class="list-group" {
                @for entry in entries {
                    li class="list-group-item" data-course-entry=(entry.id) {
                        h4 class="h6 mb-1" { (entry.title) }
                        @if let Some(blurb) = &entry.blurb {
                            p class="mb-1" { (blurb) }
                        }
                        span class="badge bg-secondary me-2" { (entry.access) }
                        a class="btn btn-sm btn-primary" href=(entry.href) { (ctx.tr(COURSE_START)) }
                    }
                }
            }
        },
        CourseListing::Empty { message, view_all_href } => html! {
            p class="text-muted" data-course-fallback { (message) }
            a class="btn btn-outline-primary" href=(view_all_href) { (ctx.tr(VIEW_ALL_COURSES)) }
        },
    }
}
