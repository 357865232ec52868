// Static copy for every page. Nothing here changes at runtime.

#[derive(Debug, Clone, PartialEq)]
pub struct IdeaCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const IDEA_CARDS: &[IdeaCard] = &[
    IdeaCard {
        icon: "📚",
        title: "Books for Every Child",
        blurb: "Stocking community reading corners in village schools.",
    },
    IdeaCard {
        icon: "💧",
        title: "Clean Water Drives",
        blurb: "Filters and hygiene kits for families without safe water.",
    },
    IdeaCard {
        icon: "🧵",
        title: "Skills for Women",
        blurb: "Tailoring, bookkeeping and digital literacy workshops.",
    },
    IdeaCard {
        icon: "🌱",
        title: "Green Neighbourhoods",
        blurb: "Tree planting and waste sorting with local volunteers.",
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Veera Foundation is a volunteer-led non-profit working alongside communities that are too often left out: rural schools, women starting over, and families rebuilding after hardship.",
    "We started as a handful of friends running weekend reading sessions. Today our volunteers run education, health and environment programmes together with local partners.",
    "Every project begins by listening. We ask people what they need, build it with them, and step back once it can stand on its own.",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub name: &'static str,
    pub detail: &'static str,
}

pub const DNA_VALUES: &[Value] = &[
    Value {
        name: "Courage",
        detail: "Veera means brave. We take on the hard, unglamorous problems.",
    },
    Value {
        name: "Compassion",
        detail: "People come first, numbers second.",
    },
    Value {
        name: "Community",
        detail: "Programmes are shaped and owned by the people they serve.",
    },
    Value {
        name: "Transparency",
        detail: "Every rupee and every hour is accounted for in public.",
    },
    Value {
        name: "Sustainability",
        detail: "We measure success by what keeps running after we leave.",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What does Veera Foundation do?",
        answer: "We run education, health and environment programmes with local communities, led almost entirely by volunteers.",
    },
    Faq {
        question: "How can I volunteer?",
        answer: "Use the contact page, pick \"Volunteer\" as your role and tell us what you are interested in. We will reach out with upcoming opportunities.",
    },
    Faq {
        question: "Can my organisation partner with you?",
        answer: "Yes. Schools, companies and other non-profits partner with us on specific projects. Choose \"Corporate / CSR\" or \"NGO partner\" on the contact form.",
    },
    Faq {
        question: "Are the polls on the home page stored anywhere?",
        answer: "No. Your picks stay in this browser tab only and disappear when you reload.",
    },
    Faq {
        question: "Where do donations go?",
        answer: "Directly to programme costs. We publish a yearly breakdown of how funds are used.",
    },
];
