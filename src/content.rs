//! Static copy for the landing page. Nothing here changes at runtime.

use crate::disclosure::DisclosureItem;

/// A block of marketing copy: heading, body text and an optional list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentSection {
    pub title: &'static str,
    pub body: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

pub const COMPANY: &str = "Dojo Legal";

pub const HERO_BADGE: &str = "DOJO LEGAL MINING";
pub const HERO_HEADING: &str = "Workforce Solutions for";
pub const HERO_HEADING_ACCENT: &str = "Mining Industry Employers";
pub const HERO_SUBHEADING: &str = "Secure reliable, safety-conscious skilled labour. We combine legal compliance, \
    visa sponsorship, and specialized recruitment to keep your site fully operational.";
pub const HERO_CTA: &str = "Book a Strategy Session";

pub const MISSION: ContentSection = ContentSection {
    title: "Building Safe, Compliant Mining Workforces.",
    body: "In the high-stakes mining sector, a gap in your workforce means lost production and safety risks. \
        Dojo Legal delivers more than just workers; we deliver a legally compliant, \
        safety-verified workforce strategy that scales with your project lifecycle.",
    items: &[],
};
pub const MISSION_TAGLINE: &str = "Not Just Filling Roles.";

pub const BENEFITS_HEADING: &str = "Why Mining Employers Choose";

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Specialised for Multi-Site Ops",
        description: "Logistics of FIFO/DIDO and remote site management are in our DNA.",
    },
    Benefit {
        title: "Safety & Risk Focus",
        description: "Every candidate vetted for safety certifications/tickets before stepping on site.",
    },
    Benefit {
        title: "Integrated Legal & Support",
        description: "End-to-end migration law and recruitment in one partner. Less admin for you.",
    },
];

pub const SERVICES: ContentSection = ContentSection {
    title: "Integrated Workforce, Visa, and Recruitment Support",
    body: "From skilled plant operators to site engineers, we source and sponsor the talent you can't find locally.",
    items: &[
        "Excavator & Dump Truck Operators",
        "Diesel Fitters & Heavy Mechanics",
        "Mining Engineers & Geologists",
        "Site Safety Officers",
        "Process Technicians",
    ],
};

pub const ABOUT: ContentSection = ContentSection {
    title: "Migration Lawyers and Workforce Partners",
    body: "Led by experienced immigration lawyers, Dojo Legal bridges the gap between complex Australian \
        migration laws and the practical needs of the mining sector. We don't just find workers; we secure \
        their longevity on your site through proper visa pathways.",
    items: &[],
};

pub const FAQ_HEADING: &str = "Frequently Asked Questions";

pub const FAQS: &[DisclosureItem] = &[
    DisclosureItem {
        question: "Can you handle labour agreements for remote mining sites?",
        answer: "Yes, we specialise in DAMA and company-specific labour agreements for regional and remote mining operations.",
    },
    DisclosureItem {
        question: "Do your candidates have Australian safety tickets?",
        answer: "We ensure all candidates either hold valid Australian tickets or are guided through the recognition of prior learning (RPL) process.",
    },
    DisclosureItem {
        question: "How quickly can you mobilise a team?",
        answer: "Timelines vary by visa type, but our integrated legal team fast-tracks the sponsorship process to get workers on-site ASAP.",
    },
    DisclosureItem {
        question: "Do you handle FIFO logistics?",
        answer: "We assist with the visa and initial relocation aspects, partnering with your logistics team to ensure smooth deployment.",
    },
];

pub const CONTACT_HEADING: &str = "Ready to Secure Your Workforce?";
pub const CONTACT_LEAD: &str = "Reach out for a confidential strategy session.";

pub const CONTACT: ContactDetails = ContactDetails {
    email: "support@dojolegal.com.au",
    phone: "0468 836 899",
    address: "Level 1, 233 Canley Vale Road, Canley Heights NSW 2166",
};

pub const FOOTER_OWNER: &str = "Dojo Legal Australia";
pub const FOOTER_LINKS: &[&str] = &["Privacy Policy", "Terms of Service"];
