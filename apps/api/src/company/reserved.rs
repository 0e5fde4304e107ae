//! Reserved companies: six organizations with fixed, hand-curated records.
//!
//! These are the only hardcoded company data in the service. Every consumer
//! gets a fresh `CompanyRecord` built from the static table, so nothing can
//! mutate the constants. Category scores are derived from the sub-scores.

use crate::company::models::{CategoryScores, CompanyAnalysis, CompanyRecord, SubcategoryScores};
use crate::company::store::store_key;

/// Static description of a reserved company.
struct ReservedCompany {
    /// Accepted lowercase spellings; the first one is the canonical key.
    keys: &'static [&'static str],
    name: &'static str,
    /// In `SubCategory::ALL` order.
    subcategories: [u32; 20],
    glassdoor_score: f64,
    num_employees: u64,
    linkedin_followers: u64,
    headquarters: &'static str,
    stock_ticker: &'static str,
    stock_price: f64,
    primary_color: &'static str,
    top3_words: [&'static str; 3],
    evp_statement: &'static str,
    overview: &'static str,
    /// In `Category::ALL` order.
    analysis: [&'static str; 5],
}

impl ReservedCompany {
    fn to_record(&self) -> CompanyRecord {
        let subcategories = SubcategoryScores::from_array(self.subcategories);
        let [brand, compensation, growth, people, innovation] = self.analysis;
        CompanyRecord {
            scores: CategoryScores::from_subcategories(&subcategories),
            subcategories,
            glassdoor_score: self.glassdoor_score,
            num_employees: self.num_employees,
            linkedin_followers: self.linkedin_followers,
            headquarters: self.headquarters.to_string(),
            stock_ticker: Some(self.stock_ticker.to_string()),
            stock_price: Some(self.stock_price),
            primary_color: Some(self.primary_color.to_string()),
            top3_words: self.top3_words.iter().map(|w| w.to_string()).collect(),
            evp_statement: self.evp_statement.to_string(),
            analysis: CompanyAnalysis {
                overview: self.overview.to_string(),
                brand_position_and_perception: brand.to_string(),
                compensation_and_benefits: compensation.to_string(),
                growth_and_development: growth.to_string(),
                people_and_culture: people.to_string(),
                innovation_and_products: innovation.to_string(),
            },
            company_name: Some(self.name.to_string()),
            email: None,
            timestamp: None,
        }
    }
}

const GOOGLE: ReservedCompany = ReservedCompany {
    keys: &["google"],
    name: "Google",
    subcategories: [5, 5, 4, 5, 5, 5, 4, 4, 5, 5, 5, 4, 5, 5, 5, 5, 5, 5, 4, 5],
    glassdoor_score: 4.4,
    num_employees: 156_500,
    linkedin_followers: 28_500_000,
    headquarters: "Mountain View, CA, USA",
    stock_ticker: "GOOGL",
    stock_price: 134.60,
    primary_color: "#4285F4",
    top3_words: ["Innovative", "Collaborative", "Impactful"],
    evp_statement: "Google creates technology that helps people do more. Their mission is to organize the world's information and make it universally accessible and useful, while providing an environment where talented, passionate people can thrive and grow.",
    overview: "Google excels in creating a workplace that values technical excellence and innovation. Their strong focus on employee experience and competency development is evident in their high scores in these areas.",
    analysis: [
        "Google has built a strong culture of inclusion and diversity, with effective leadership that inspires employees. Their workplace environment encourages collaboration and creativity, though some employees report challenges with work-life balance in certain teams.",
        "Google offers competitive compensation packages with strong benefits. Their performance recognition systems are well-structured, though some employees report that compensation transparency could be improved.",
        "Google offers exceptional learning opportunities and a strong employer brand. Their commitment to innovation is unmatched, though work-life balance can be challenging in some departments.",
        "Google provides employees with cutting-edge tools and resources, creating an environment where technical excellence is both expected and supported. Their professional development programs are industry-leading.",
        "Google's mission to organize the world's information resonates with many employees. Their sustainability initiatives and social impact programs are substantial, though some employees seek more direct connection to meaningful work.",
    ],
};

const WALMART: ReservedCompany = ReservedCompany {
    keys: &["walmart"],
    name: "Walmart",
    subcategories: [4, 4, 4, 4, 4, 3, 4, 4, 4, 4, 4, 5, 4, 4, 4, 4, 4, 4, 4, 4],
    glassdoor_score: 3.3,
    num_employees: 2_300_000,
    linkedin_followers: 13_700_000,
    headquarters: "Bentonville, AR, USA",
    stock_ticker: "WMT",
    stock_price: 68.24,
    primary_color: "#0071CE",
    top3_words: ["Stable", "Diverse", "Accessible"],
    evp_statement: "Walmart offers associates the opportunity to build a career with competitive pay, benefits, and advancement potential, while working for a company committed to helping people save money and live better.",
    overview: "Walmart has made significant strides in improving their workplace culture, though they still face challenges in some areas. Their massive scale presents both opportunities and difficulties in creating consistent employee experiences.",
    analysis: [
        "Walmart has been working to improve diversity and inclusion initiatives. Their workplace culture varies significantly between locations, with some stores reporting strong team environments while others face leadership challenges.",
        "Walmart has increased starting wages in recent years, though they still face criticism regarding compensation. Their benefits program has improved, but retention remains a challenge in some markets.",
        "Walmart offers clear career paths for advancement, particularly for store employees moving into management. Their recent investments in technology show commitment to innovation, though work-life balance can be challenging in retail roles.",
        "Walmart provides standardized training programs across their vast network. Employee experiences can vary widely between locations, though recent investments in employee development show promise.",
        "Walmart's sustainability initiatives have grown substantially. Their community involvement is significant, though employee engagement with corporate goals varies across locations.",
    ],
};

const HUBSPOT: ReservedCompany = ReservedCompany {
    keys: &["hubspot"],
    name: "HubSpot",
    subcategories: [5, 5, 5, 4, 5, 5, 4, 4, 5, 5, 4, 4, 5, 5, 5, 4, 5, 4, 5, 5],
    glassdoor_score: 4.5,
    num_employees: 7_400,
    linkedin_followers: 870_000,
    headquarters: "Cambridge, MA, USA",
    stock_ticker: "HUBS",
    stock_price: 432.85,
    primary_color: "#FF7A59",
    top3_words: ["Transparent", "Growth-oriented", "Empowering"],
    evp_statement: "HubSpot is building a company where talented people can grow, thrive, and do their best work. The company is dedicated to creating a culture of transparency, autonomy, and flexibility that helps businesses and people grow better.",
    overview: "HubSpot has created a strong culture-driven workplace with an emphasis on transparency and employee growth. Their commitment to purpose and involvement stands out as a particular strength.",
    analysis: [
        "HubSpot is known for its strong culture code and emphasis on transparency. Their leadership team is highly accessible, and they've made significant investments in diversity and inclusion initiatives in recent years.",
        "HubSpot offers competitive compensation packages with strong benefits. Their performance recognition systems are well-regarded by employees, with regular feedback cycles.",
        "HubSpot offers substantial professional development opportunities and has created a strong employer brand. Their work-life balance is frequently cited as a positive by employees.",
        "HubSpot provides employees with the tools and resources needed to succeed, though some teams report occasional resource constraints during periods of rapid growth. Their onboarding process is highly regarded.",
        "HubSpot's mission to help businesses grow better resonates strongly with employees. Their corporate culture emphasizes making an impact, and employees report high levels of engagement with company goals.",
    ],
};

const NASDAQ: ReservedCompany = ReservedCompany {
    keys: &["nasdaq"],
    name: "Nasdaq",
    subcategories: [4, 5, 4, 5, 5, 5, 5, 4, 5, 5, 5, 4, 4, 5, 5, 5, 4, 4, 5, 5],
    glassdoor_score: 4.2,
    num_employees: 6_300,
    linkedin_followers: 1_240_000,
    headquarters: "New York, NY, USA",
    stock_ticker: "NDAQ",
    stock_price: 178.42,
    primary_color: "#0092CF",
    top3_words: ["Innovative", "Financial-Focused", "Progressive"],
    evp_statement: "Nasdaq provides a dynamic environment where financial technology experts drive market innovation and excellence. The company creates a collaborative culture that rewards intellectual curiosity and technological advancement while supporting the global financial ecosystem.",
    overview: "Nasdaq combines financial expertise with technological innovation to create a workplace that rewards performance and intellectual curiosity. Their strong scores in experience and competency reflect their emphasis on professional excellence.",
    analysis: [
        "Nasdaq promotes a culture of collaboration and innovation. Their leadership is well-respected in the financial industry, though diversity initiatives are still evolving compared to some technology-focused competitors.",
        "Nasdaq offers highly competitive compensation packages, particularly for specialized roles. Their performance-based rewards system is well-structured, though some employees report that transparency could be improved.",
        "Nasdaq invests heavily in employee development, particularly in financial technology skills. Their learning programs are comprehensive, and they actively promote innovation across the organization.",
        "Nasdaq provides excellent resources for employees to develop their expertise. Their onboarding and mentorship programs receive positive feedback, creating a consistent employee experience.",
        "Nasdaq's mission to drive market excellence resonates with employees. Their sustainability initiatives continue to expand, and employees report strong alignment with the company's goals.",
    ],
};

const LOREAL: ReservedCompany = ReservedCompany {
    keys: &["loreal", "l'oreal", "l oreal"],
    name: "L'Oreal",
    subcategories: [5, 5, 4, 5, 4, 4, 5, 4, 5, 5, 5, 3, 5, 5, 4, 4, 5, 5, 4, 5],
    glassdoor_score: 4.1,
    num_employees: 85_400,
    linkedin_followers: 4_800_000,
    headquarters: "Clichy, France",
    stock_ticker: "OR.PA",
    stock_price: 385.55,
    primary_color: "#CC0033",
    top3_words: ["Innovative", "Creative", "Diverse"],
    evp_statement: "L'Oreal creates a dynamic environment where beauty and science converge through innovation, diversity, and sustainability. The company fosters a culture that values expertise, creativity, and ethical leadership while empowering employees to shape the future of beauty.",
    overview: "L'Oreal creates a dynamic workplace that balances creativity with scientific innovation in the beauty industry. Their commitment to ethics, sustainability, and diversity is woven throughout their employer brand.",
    analysis: [
        "L'Oreal has established a strong reputation for diversity and inclusion across their global operations. Their workplace environment celebrates different perspectives and cultural backgrounds, contributing to their creative and innovative atmosphere.",
        "L'Oreal offers competitive compensation with strong performance-based incentives. Their recognition systems are highly developed, celebrating both innovation and business results, though complete compensation transparency remains a work in progress.",
        "L'Oreal offers significant career development paths with international opportunities. Their focus on innovation in beauty technology attracts top talent, though work-life balance can be challenging during product launches and major campaigns.",
        "L'Oreal invests heavily in employee skills development and provides exceptional training programs. Their 'beauty tech' focus means employees have access to cutting-edge tools and research facilities, though resource distribution can vary between divisions.",
        "L'Oreal's sustainability program 'For the Future' has created strong employee engagement around environmental and social responsibility. Their sense of purpose connecting beauty with confidence resonates throughout the organization.",
    ],
};

const MASTERCARD: ReservedCompany = ReservedCompany {
    keys: &["mastercard"],
    name: "Mastercard",
    subcategories: [5, 5, 4, 5, 5, 5, 5, 4, 5, 5, 5, 3, 5, 5, 5, 4, 5, 4, 5, 4],
    glassdoor_score: 4.3,
    num_employees: 29_000,
    linkedin_followers: 3_900_000,
    headquarters: "Purchase, NY, USA",
    stock_ticker: "MA",
    stock_price: 452.33,
    primary_color: "#EB001B",
    top3_words: ["Innovative", "Inclusive", "Purpose-driven"],
    evp_statement: "Mastercard fosters an environment where technology and finance experts collaborate to build a more inclusive global economy. The company promotes a culture of innovation and purpose, connecting employees' daily work to meaningful impact around the world.",
    overview: "Mastercard has created a workplace where financial inclusion and technological innovation intersect. Their strong focus on diversity and competitive compensation make them a destination employer in the fintech space.",
    analysis: [
        "Mastercard prioritizes inclusion and has invested heavily in creating a diverse workforce. Their leadership is highly regarded for transparency and accessibility, fostering a collaborative culture across global offices.",
        "Mastercard offers top-tier compensation packages with strong benefits and equity components. Their recognition systems are well-structured at both team and company levels, contributing to high retention rates.",
        "Mastercard offers exceptional career development opportunities with clear advancement paths. Their dedication to innovation attracts talented technologists and finance professionals, though maintaining work-life balance can be challenging in some roles.",
        "Mastercard provides employees with cutting-edge payment technology and fintech resources. Their professional development programs are particularly strong in areas of digital payments, cybersecurity, and financial inclusion.",
        "Mastercard's mission of financial inclusion and connecting people to opportunities resonates deeply with employees. Their corporate social initiatives like the Center for Inclusive Growth give employees multiple avenues to contribute to meaningful social impact.",
    ],
};

const RESERVED: [&ReservedCompany; 6] = [&GOOGLE, &WALMART, &HUBSPOT, &NASDAQ, &LOREAL, &MASTERCARD];

/// Canonical store keys of the reserved companies.
pub const RESERVED_KEYS: [&str; 6] = ["google", "walmart", "hubspot", "nasdaq", "loreal", "mastercard"];

/// Returns a fresh copy of the reserved record for `name`, if it is one.
/// Matching trims and ignores case.
pub fn reserved_company(name: &str) -> Option<CompanyRecord> {
    let key = store_key(name);
    RESERVED
        .into_iter()
        .find(|company| company.keys.contains(&key.as_str()))
        .map(ReservedCompany::to_record)
}
