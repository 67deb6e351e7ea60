//! Canned response text and fallback pools.

/// Greeting appended once per session when the chat is first opened.
pub const SESSION_GREETING: &str = "Hi! I'm the site assistant. Ask me anything, or pick a shortcut: \
[1] Pricing • [2] Book a demo • [3] Contact • [4] Portfolio • [5] Tech stack";

/// Quick questions offered when a response brings none of its own.
pub const DEFAULT_QUICK_QUESTIONS: &[&str] = &[
    "How much does a website cost?",
    "Can I book a demo?",
    "What services do you offer?",
    "How long does a project take?",
    "Show me your work",
    "I have a custom question",
];

// --- Numeric shortcuts ---

pub const SHORTCUT_PRICING: &str =
    "Opening the pricing calculator so you can build your own estimate. Projects start at $2,500.";
pub const SHORTCUT_DEMO: &str =
    "Great choice! Taking you to the booking page so you can pick a demo slot.";
pub const SHORTCUT_CONTACT: &str =
    "Opening the contact form. Drop us a line and we'll reply within one business day.";
pub const SHORTCUT_PORTFOLIO: &str = "Scrolling you down to our portfolio. These are a few recent launches.";
pub const SHORTCUT_TECH_STACK: &str = "Here's our tech stack. Scrolling you there now.";

// --- Tone-qualified compounds ---

pub const COARSE_PRICING: &str = "Ha, fair. Prices can sting. We offer flexible payment plans, \
and the pricing calculator lets you strip a project down to what you actually need. Let me take you there.";
pub const COARSE_FRUSTRATION: &str = "That sounds really frustrating. Let's get a human on it. \
Opening the contact form so you can tell us what's going wrong.";
pub const CASUAL_PRICING: &str = "Bro, I hear you. Good work isn't cheap, but it pays for itself. \
Projects start at $2,500 and the pricing calculator lets you tune it to your budget. Sending you there.";
pub const CASUAL_GREETING: &[&str] = &[
    "Sup! What are we building today?",
    "Yo! Need a site, an app, or just browsing?",
    "Hey hey! Ask me anything, or type 1-5 for shortcuts.",
];
pub const CASUAL_TIMELINE: &str = "We move fast, fam. Most builds ship in 3-6 weeks, \
and rush jobs can go even quicker.";
pub const HYPED_DEMO: &str = "Let's go! Grab a demo slot that works for you. Taking you to the booking page.";
pub const HYPED_START: &str = "Love the energy! Let's make it happen. \
Opening the contact form so we can kick things off.";

// --- Generic topics ---

pub const PRICING: &str = "Our websites start at $2,500, and the final price depends on pages, \
features and integrations. The pricing calculator gives you an instant estimate. Taking you there now!";
pub const DEMO: &str = "Happy to show you around! Taking you to the booking page to schedule a free 30-minute demo.";
pub const CONTACT: &str = "You can reach the team any time. Opening the contact form for you now.";
pub const PORTFOLIO: &str = "We've shipped sites for startups, agencies and local businesses. \
Scrolling to the portfolio so you can see for yourself.";
pub const TECH_STACK: &str = "We build with modern, fast tooling:\n\
• Next.js and React on the front end\n\
• Node and Rust services on the back end\n\
• Headless CMS options so you can edit content yourself\n\
Scrolling to the tech stack section.";
pub const SERVICES: &str = "We offer:\n\
• Custom websites and landing pages\n\
• Web and mobile apps\n\
• E-commerce builds\n\
• SEO and performance tuning\n\
Scrolling to our services.";
pub const TIMELINE: &str = "Most websites launch in 3-6 weeks depending on scope. \
Rush delivery is available for tight deadlines.";
pub const PROCESS: &str = "Our process is simple: discovery call, design, build, review, launch. \
You get a preview link at every stage. Scrolling to the process section.";
pub const TEAM: &str = "We're a small senior team of designers and developers who care about craft. \
Scrolling to the team section.";
pub const GREETING_TEMPLATE: &str = "{pick} I'm the site assistant. Ask me about pricing, our work, \
or type 1-5 for shortcuts.";
pub const GREETING_OPENERS: &[&str] = &["Hey there!", "Hi!", "Hello!", "Welcome!"];
pub const THANKS: &[&str] = &[
    "You're welcome! Anything else I can help with?",
    "Anytime! Let me know if you have more questions.",
    "Happy to help!",
];
pub const WHY: &str = "Clients pick us for fast turnaround, transparent pricing and senior people \
on every project. No juniors learning on your dime.";
pub const WHEN: &str = "We usually have capacity to start new projects within 1-2 weeks. \
Book a demo to lock in a slot.";
pub const WHERE: &str = "We're a remote-first team working across European and US time zones, \
so someone is always online.";
pub const PAYMENT: &str = "We take a 50% deposit to start and the rest at launch. \
Payment plans are available for larger projects. We accept card and bank transfer.";
pub const GUARANTEE: &str = "Every project includes two revision rounds and a 30-day post-launch warranty. \
If something breaks, we fix it.";
pub const EXPERIENCE: &str = "We've been building for the web for over 8 years and have launched 120+ projects.";
pub const START: &str = "Getting started is easy: book a short kickoff call and we'll scope your project together. \
Taking you to the booking page.";
pub const URGENT: &str = "Need it fast? We take on rush projects. \
Opening the contact form so we can get back to you today.";
pub const COMPARISON: &str = "Compared to template builders and freelance marketplaces, \
you get a dedicated team, custom code you own, and support after launch.";

// --- Fallbacks ---

/// Interrogative input that no topic recognised.
pub const QUESTION_POOL: &[&str] = &[
    "Good question! I don't have a precise answer for that one, but I can help with pricing, \
timelines, our process or booking a demo.",
    "Hmm, I'm not sure about that. I'm best at questions about pricing, services and our work. \
Type 1-5 for shortcuts.",
    "I don't know that one yet, but the team does! Type 3 to open the contact form.",
];

/// Nothing matched at all.
pub const DEFAULT_POOL: &[&str] = &[
    "I'm here to help! Try one of these: [1] Pricing • [2] Book a demo • [3] Contact • [4] Portfolio • [5] Tech stack",
    "Not sure I caught that. You can ask about pricing, services or timelines, or type 1-5 for shortcuts.",
    "I can help with pricing, demos, our portfolio and our tech stack. What would you like to know?",
    "Let me point you in the right direction: [1] Pricing • [2] Book a demo • [3] Contact • [4] Portfolio • [5] Tech stack",
];
