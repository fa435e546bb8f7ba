//! Curated static content: the biography pages have no mutable state, so
//! everything here is plain data served to the webview on request.

pub mod commands;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillCategory {
    Tech,
    Creative,
    Language,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: &'static str,
    /// 0-100.
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    /// YYYY.MM
    pub date: &'static str,
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalIcon {
    Mountain,
    Compass,
    Rocket,
    Heart,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub timeframe: &'static str,
    pub icon: GoalIcon,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: Vec<&'static str>,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub year: &'static str,
    pub lines: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HobbyItem {
    pub name: &'static str,
    pub sub: &'static str,
}

/// One sidebar category on the tastes page. The photography category has
/// prose paragraphs instead of a pick list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HobbyCategory {
    pub category: &'static str,
    pub description: &'static str,
    pub items: Vec<HobbyItem>,
    pub prose: Vec<&'static str>,
}

pub fn skills() -> Vec<Skill> {
    vec![
        Skill { name: "HTML5+CSS3+JAVASCRIPT", level: 70, category: SkillCategory::Tech },
        Skill { name: "JAVA", level: 70, category: SkillCategory::Tech },
        Skill { name: "Python", level: 50, category: SkillCategory::Tech },
        Skill { name: "어셈블리어", level: 50, category: SkillCategory::Tech },
        Skill { name: "Photo/Video Editing", level: 40, category: SkillCategory::Creative },
        Skill { name: "프랑스어", level: 45, category: SkillCategory::Language },
    ]
}

/// Certifications, newest first.
pub fn certifications() -> Vec<Certification> {
    let mut certs = vec![
        Certification {
            id: "c1",
            title: "ITQ OA Master",
            issuer: "한국생산성본부",
            date: "2022.04",
            description: Some("정보기술자격 OA 마스터 (A등급 3과목)"),
        },
        Certification {
            id: "c2",
            title: "컴퓨터활용능력 2급",
            issuer: "대한상공회의소",
            date: "2022.05",
            description: Some("스프레드시트 일반 및 실무 활용"),
        },
        Certification {
            id: "c3",
            title: "비서 1급",
            issuer: "대한상공회의소",
            date: "2022.05",
            description: Some("전문 비서 실무 및 경영 관리"),
        },
        Certification {
            id: "c4",
            title: "정보처리기능사",
            issuer: "한국산업인력공단",
            date: "2023.09",
            description: Some("컴퓨터 시스템 운용 및 프로그래밍 기초"),
        },
        Certification {
            id: "c5",
            title: "ADsP (데이터분석 준전문가)",
            issuer: "한국데이터산업진흥원",
            date: "2025.09",
            description: Some("데이터 분석 기획 및 분석 실무"),
        },
        Certification {
            id: "c6",
            title: "DELF A2",
            issuer: "France Education International",
            date: "2025.05",
            description: Some("프랑스어 공인 인증 자격증"),
        },
    ];
    certs.sort_by(|a, b| b.date.cmp(a.date));
    certs
}

pub fn goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "g1",
            title: "유니콘 기업",
            description: "향후 5년 내 유니콘 기업에 취직해보기.",
            timeframe: "2030",
            icon: GoalIcon::Rocket,
        },
        Goal {
            id: "g2",
            title: "Orange회사 취직",
            description: "프랑스 통신사 중 하나인 orange 기업에 취직하기.",
            timeframe: "2030",
            icon: GoalIcon::Heart,
        },
        Goal {
            id: "g3",
            title: "디지털 노마드",
            description: "향후 15년 내 3개국에서 원격으로 일하면서 살아보기.",
            timeframe: "2040",
            icon: GoalIcon::Compass,
        },
        Goal {
            id: "g4",
            title: "세계일주",
            description: "디지털 노마드가 어느정도 자리 잡은 후 나라를 옮겨 다니면서 많은 경험들을 하고 다니고 그걸 기록하기.",
            timeframe: "2040",
            icon: GoalIcon::Mountain,
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "p1",
            title: "GameHub",
            description: "다양한 게임사들의 게임들을 한눈에 확인 할 수 있는 웹사이트.",
            tech_stack: vec!["HTML5", "CSS3", "JAVASCRIPT", "VIBE CODING"],
            link: Some("https://jeonghun-k.github.io/webprogramming/GameHub/"),
        },
        Project {
            id: "p2",
            title: "Fêter",
            description: "전국의 축제 api를 가져와서 지역별로 나눠 확인 할 수 있고 공휴일에 어떤 축제를 하는지 확인 하는 웹페이지.",
            tech_stack: vec!["JAVASCRIPT", "HTML5", "CSS3", "API", "VIBE CODING", "Readdy.ai"],
            link: Some("https://readdy.link/preview/a8f69ef0-c19a-4f81-9913-f5d2d5fcda22/4170240"),
        },
        Project {
            id: "p3",
            title: "Olymfit Guide",
            description: "올림픽공원 및 체육센터 강좌 정보를 API로 제공하며, 날씨/연령/취향 맞춤 추천과 시간대별 센터 혼잡도를 시각화하여 보여주는 서비스.",
            tech_stack: vec!["HTML5", "CSS3", "JAVASCRIPT", "API", "QR코드", "반응형 웹", "공모전"],
            link: Some("https://jeonghun-k.github.io/webprogramming/olymfit%20guide/"),
        },
        Project {
            id: "p4",
            title: "Study Spot Finder",
            description: "위치 검색 및 현재 위치 기반으로 주변 독서실, 도서관 정보를 찾아주며, Focus Timer 기능으로 학습 시간을 기록할 수 있는 웹 서비스.",
            tech_stack: vec!["HTML5", "CSS3", "JAVASCRIPT", "VIBE CODING", "API", "QR코드", "반응형 웹", "PWA", "Figma"],
            link: Some("https://jeonghun-k.github.io/webprogramming/1126/"),
        },
    ]
}

pub fn life_history() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry { year: "2002.05", lines: vec!["부산 영도구 출생", "1남 1녀 중 장남"] },
        HistoryEntry { year: "2021.03", lines: vec!["경성대학교", "소프트웨어학과 입학"] },
        HistoryEntry { year: "2024.05", lines: vec!["공군 병 전역 및", "임기제부사관 임관"] },
        HistoryEntry { year: "2024.12", lines: vec!["임기제 부사관 전역"] },
        HistoryEntry { year: "2025.01", lines: vec!["6개월 프랑스 리옹", "어학연수"] },
    ]
}

pub fn hobbies() -> Vec<HobbyCategory> {
    vec![
        HobbyCategory {
            category: "와인",
            description: "기억에 남는 빈티지와 노트들",
            items: vec![
                HobbyItem { name: "Domaine Guiberteau 2021", sub: "도멘 기베르토 2021" },
                HobbyItem { name: "Marsannay 2023", sub: "마르사네 2023" },
                HobbyItem { name: "Gevrey-chamberin 2021", sub: "제브레 샹베르탱 2021" },
                HobbyItem { name: "Cloudy Bay Sauvignon Blanc", sub: "클라우디 베이 소비뇽 블랑" },
                HobbyItem { name: "DOUDET -NAUDIN 2023", sub: "두데 노당 2023" },
            ],
            prose: vec![],
        },
        HobbyCategory {
            category: "클래식",
            description: "영감을 주는 선율과 교향곡",
            items: vec![
                HobbyItem { name: "Rachmaninoff - Piano Concerto No. 2", sub: "라흐마니노프 피아노협주곡 2번 2,3악장" },
                HobbyItem { name: "Bolcom - Graceful Ghost Rag", sub: "볼컴 우아한 유령" },
                HobbyItem { name: "Liszt - Liebestraum No. 3", sub: "리스트 사랑의 꿈" },
                HobbyItem { name: "Ravel - Piano Concerto in G Major", sub: "라벨 피아노협주곡 2악장" },
                HobbyItem { name: "Tchaikovsky - Violin Concerto", sub: "차이코프스키 바이올린협주곡 3악장" },
            ],
            prose: vec![],
        },
        HobbyCategory {
            category: "향수",
            description: "나를 표현하는 향기의 기록",
            items: vec![
                HobbyItem { name: "Byredo - Mojave Ghost", sub: "바이레도 - 모하비 고스트" },
                HobbyItem { name: "Acqua di Parma - Fico di Amalfi", sub: "아쿠아 디 파르마 - 피고 디 아말피" },
                HobbyItem { name: "Diptyque - Do Son", sub: "딥디크 - 도 손" },
                HobbyItem { name: "Frederic Malle - Portrait of a Lady", sub: "프레데릭 말 - 포트레이트 오브 어 레이디" },
                HobbyItem { name: "Daniel Truth - Bombshell", sub: "다니엘 트루스 - 밤쉘루스" },
            ],
            prose: vec![],
        },
        HobbyCategory {
            category: "사진",
            description: "프레임 안에서 멈춘 시간의 미학",
            items: vec![],
            prose: vec![
                "셔터를 누르는 순간, 흐르던 시간은 멈추고 찰나는 영원이 됩니다.",
                "저에게 사진은 단순한 기록을 넘어, 무심코 지나칠 수 있는 일상의 조각들을 저만의 시선으로 재해석하는 과정입니다. 완벽한 구도나 기술적인 선명함보다는, 그 순간의 공기와 온도, 그리고 피사체에 담긴 이야기를 뷰파인더에 담아내려 노력합니다.",
                "낯선 도시의 골목길에서, 혹은 매일 걷는 산책로에서 마주하는 빛과 그림자의 유희는 저에게 끊임없는 영감을 줍니다.",
            ],
        },
    ]
}
