//! Built-in profile shipped with the binary

use super::profile::{
    Article, Certificate, Contact, Education, Experience, Profile, Project, SkillGroup, Stat,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(name: &str, description: &str, tags: &[&str], link: &str) -> Project {
    Project {
        name: name.to_string(),
        description: description.to_string(),
        tags: strings(tags),
        link: Some(link.to_string()),
        note: None,
        featured: false,
    }
}

fn certificate(name: &str, link: &str) -> Certificate {
    Certificate {
        name: name.to_string(),
        link: Some(link.to_string()),
    }
}

fn stat(label: &str, value: &str, persona: Option<&str>) -> Stat {
    Stat {
        label: label.to_string(),
        value: value.to_string(),
        persona: persona.map(str::to_string),
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Kaustav Dey".to_string(),
            possessive: "his".to_string(),
            brand: Some("KD.AI".to_string()),
            role: "Generative AI Engineer".to_string(),
            tagline: "Turning Data into Intelligence".to_string(),
            summary: "Specializing in RAG systems, Multi-Agent architectures, and scalable AI \
                      solutions. Leveraging LangChain, CrewAI, and LLMs."
                .to_string(),
            about: "I am an AI Engineer with a passion for building systems that reason. My \
                    journey started with data science competitions and evolved into architecting \
                    complex RAG pipelines. With strong roots in Python and Deep Learning, I bridge \
                    the gap between research and production."
                .to_string(),
            skill_groups: vec![
                SkillGroup {
                    title: "Languages".to_string(),
                    skills: strings(&["Python", "SQL"]),
                },
                SkillGroup {
                    title: "Frameworks".to_string(),
                    skills: strings(&[
                        "LangChain",
                        "CrewAI",
                        "TensorFlow",
                        "PyTorch",
                        "Pandas",
                        "NumPy",
                        "Scikit-Learn",
                    ]),
                },
                SkillGroup {
                    title: "Gen AI & NLP".to_string(),
                    skills: strings(&[
                        "RAG Systems",
                        "LLMs (Llama 3)",
                        "Vector DBs",
                        "Prompt Eng.",
                        "Multi-Agent Systems",
                    ]),
                },
                SkillGroup {
                    title: "Tools & Cloud".to_string(),
                    skills: strings(&[
                        "AWS",
                        "Azure MLOps",
                        "Hugging Face",
                        "Power BI",
                        "Git",
                        "Figma",
                        "VS Code",
                    ]),
                },
            ],
            tech_stack: strings(&[
                "Python",
                "SQL",
                "LangChain",
                "CrewAI",
                "TensorFlow",
                "PyTorch",
                "Pandas",
                "NumPy",
                "Scikit-Learn",
                "RAG Systems",
                "Llama 3",
                "Vector DBs",
                "AWS",
                "Azure MLOps",
                "Hugging Face",
                "Power BI",
            ]),
            experience: vec![
                Experience {
                    company: "NoBroker".to_string(),
                    role: "Data Research Intern".to_string(),
                    period: "Nov 2024 - May 2025".to_string(),
                    summary: "Built Python web scrapers (80% productivity boost), automated data \
                              pipelines, ranking 11k+ SEO pages via EDA."
                        .to_string(),
                    highlights: strings(&[
                        "Engineered a Python web scraper to automate data extraction, boosting team productivity by 80%.",
                        "Built an automated data pipeline to transform unstructured web sources into structured datasets.",
                        "Conducted Exploratory Data Analysis (EDA) on competitor metrics to optimize SEO strategy, ranking 11k+ pages.",
                        "Replaced manual data workflows with programmatic collection methods, significantly improving integrity.",
                    ]),
                },
                Experience {
                    company: "Intellipaat".to_string(),
                    role: "Data Science Intern".to_string(),
                    period: "Aug 2023 - Nov 2024".to_string(),
                    summary: "Optimized fraud detection (30% accuracy boost) using Random Forests, \
                              built LSTM RNNs for churn prediction (85% accuracy)."
                        .to_string(),
                    highlights: strings(&[
                        "Optimized fraud detection systems using Random Forests, increasing model accuracy by 30%.",
                        "Engineered LSTM-based RNNs to analyze temporal customer behavior for churn prediction (85% accuracy).",
                        "Designed interactive Power BI dashboards to visualize model outputs and translate data into insights.",
                    ]),
                },
            ],
            education: vec![Education {
                institution: "Techno Main Salt Lake".to_string(),
                degree: "B.Tech in Computer Science & Engineering".to_string(),
                short_degree: Some("B.Tech in CSE".to_string()),
                grade: Some("GPA 8.52".to_string()),
                period: "2019-2023".to_string(),
            }],
            projects: vec![
                Project {
                    featured: true,
                    ..project(
                        "Meta Kaggler",
                        "Data analysis platform for Kaggle datasets.",
                        &["Python", "Pandas"],
                        "https://github.com/Kaustav2023/Meta-Kaggler",
                    )
                },
                Project {
                    featured: true,
                    note: Some("Groq/Llama3".to_string()),
                    ..project(
                        "RAG-OneShot",
                        "Context-aware chatbot using Groq & Llama 3.",
                        &["LangChain", "RAG"],
                        "https://github.com/Kaustav2023/RAG-OneShot",
                    )
                },
                Project {
                    featured: true,
                    note: Some("CrewAI".to_string()),
                    ..project(
                        "Agent-AnalytiX",
                        "Multi-agent research system with CrewAI.",
                        &["AI Agents", "CrewAI"],
                        "https://github.com/Kaustav2023/Agent-AnalytiX",
                    )
                },
                Project {
                    featured: true,
                    ..project(
                        "Netflix Recommender",
                        "Content-based recommendation engine.",
                        &["ML", "Scikit-learn"],
                        "https://github.com/Kaustav2023/Netflix_Recommendation_System",
                    )
                },
                project(
                    "Disease Prediction WebApp",
                    "Multiple disease prediction webapp.",
                    &["Streamlit", "ML"],
                    "https://github.com/Kaustav2023/multiple_disease_prediction_web_app",
                ),
            ],
            certificates: vec![
                certificate(
                    "Complete Generative AI Course (Udemy)",
                    "https://drive.google.com/file/d/1z9S8UVuJ8B8uqqs8pMz3UeKM91Hr57R4/view",
                ),
                certificate(
                    "Advanced Certification in Data Science and AI (IIT Roorkee)",
                    "https://drive.google.com/file/d/13iNagIrZmWalp_mcg9ipP1UbuIPaSqgV/view",
                ),
                certificate(
                    "Getting Started with AWS Machine Learning",
                    "https://www.coursera.org/account/accomplishments/verify/N993X3QKNPQS",
                ),
                certificate(
                    "Data Analytics and Visualization (Accenture)",
                    "https://www.theforage.com/",
                ),
                certificate(
                    "Tableau Training for Data Science (Udemy)",
                    "https://www.udemy.com/certificate/UC-e675672a-2059-4c8f-aa77-ba4bdc085f8a/",
                ),
                certificate(
                    "Advanced Microsoft Excel Certificate (Udemy)",
                    "https://www.udemy.com/certificate/UC-86e3dcbe-d72e-43e1-a008-c0b14ffbedd6/",
                ),
                certificate(
                    "Python Data Analysis (Coursera)",
                    "https://www.coursera.org/account/accomplishments/verify/TZQNL834LMCX",
                ),
                certificate(
                    "Introduction to Big Data (Coursera)",
                    "https://www.coursera.org/account/accomplishments/verify/L943E9YBBX3N",
                ),
                certificate(
                    "Introduction to AWS Identity and Access Management (Coursera)",
                    "https://www.coursera.org/account/accomplishments/verify/X62Q29TLN9BJ",
                ),
            ],
            articles: vec![
                Article {
                    title: "Multiple Disease Prediction WebApp".to_string(),
                    summary: "An interactive application designed to predict the likelihood of \
                              three major diseases: heart disease, diabetes, and Parkinson's \
                              disease..."
                        .to_string(),
                    link: Some(
                        "https://medium.com/@kaustavdey2015/multiple-disease-prediction-webapp-1f603c9588ce"
                            .to_string(),
                    ),
                },
                Article {
                    title: "Zomato Sales Uncovered: Deep Analysis".to_string(),
                    summary: "The Zomato Sales Dashboard, developed using Power BI, provides an \
                              insightful analysis of Zomato's sales performance across various \
                              cities in India..."
                        .to_string(),
                    link: Some(
                        "https://medium.com/@kaustavdey2015/zomato-sales-dashboard-power-bi-aa493cf35081"
                            .to_string(),
                    ),
                },
            ],
            stats: vec![
                stat("Projects", "30+", Some("30+ Projects")),
                stat("Experience", "1.8 Yrs", Some("1.8 Years Experience")),
                stat("LeetCode", "1507", Some("1507 LeetCode Rating")),
                stat("Coffee", "500+", None),
            ],
            tone: "Professional, enthusiastic, technically precise but accessible.".to_string(),
            contact: Contact {
                email: "kaustavdey2015@gmail.com".to_string(),
                github: Some("https://github.com/Kaustav2023".to_string()),
                linkedin: Some("https://www.linkedin.com/in/imkd/".to_string()),
                resume: Some(
                    "https://drive.google.com/file/d/1OD72NoM0UQIUznM-R-mMAteAXAkEzmjZ/view"
                        .to_string(),
                ),
            },
            instructions: strings(&[
                "Keep ALL responses under 3 sentences maximum",
                "Be concise and natural",
                "Never write long paragraphs",
            ]),
        }
    }
}
