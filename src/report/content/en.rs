//! English copy.

use super::Entry;
use super::Topic::*;

pub(super) static ENTRIES: &[Entry] = &[
    // ========================================================================
    // HEADINGS
    // ========================================================================
    Entry::new(Heading, "cover", "Personalized Wine Report"),
    Entry::new(Heading, "introduction", "Introduction"),
    Entry::new(Heading, "relationship", "Your Relationship with Wine and Heritage"),
    Entry::new(Heading, "diversification", "Wine as a Tool for Diversification"),
    Entry::new(Heading, "heritage", "Preserving and Enhancing Wine as Heritage"),
    Entry::new(Heading, "risk", "Your Risk Appetite"),
    Entry::new(Heading, "transmission", "Wine as a Tool for Transmission"),
    Entry::new(Heading, "reserve", "The Legal Reserve and the Disposable Portion"),
    Entry::new(Heading, "matrimonial", "The Matrimonial Regime"),
    Entry::new(Heading, "company", "Alternative Ways of Optimisation"),
    Entry::new(Heading, "donation", "Donation: Giving with Purpose"),
    Entry::new(Heading, "conclusion", "In Conclusion"),
    Entry::new(Heading, "annex", "APPENDIX"),

    // ========================================================================
    // INTRODUCTION
    // ========================================================================
    Entry::new(
        Introduction,
        "text",
        "At GrandcruX, we believe that every wine enthusiast has their own preferences, \
         convictions, and way of appreciating both the pleasure and the value of a bottle. \
         Before any purchase or investment, it is essential to stay informed, to understand \
         the challenges and opportunities offered by this unique world.\n\nThis document is \
         not intended to provide financial or legal advice. It is above all a personalized \
         presentation designed to inform and inspire you, so that your passion for wine \
         becomes an enlightened and sustainable pursuit.",
    ),

    // ========================================================================
    // PROFILE (KNOWLEDGE / RELATION)
    // ========================================================================
    Entry::new(
        ProfileSummary,
        "text",
        "We noted that you are {knowledge} and that your main relationship to wine is \
         focused on {relation}.",
    ),
    Entry::new(
        Knowledge,
        "debutant",
        "Your interest in wine is an excellent starting point. The world of wine is vast and \
         fascinating: learning to distinguish regions, vintages, and styles is a rewarding \
         journey that can be experienced through tasting, reading, and visiting estates.",
    ),
    Entry::new(
        Knowledge,
        "amateur",
        "Your profile as an informed wine enthusiast shows a strong curiosity. Deepening \
         your knowledge of producers, terroirs, and vintages will refine your selections and \
         strengthen the pleasure and cultural dimension of your cellar.",
    ),
    Entry::new(
        Knowledge,
        "connaisseur",
        "Your profile as a connoisseur or collector reflects an expert approach to wine. You \
         are likely attentive to provenance, storage, and rarity — key aspects for \
         preserving the cultural and potential value of your bottles over time.",
    ),
    Entry::new(
        Knowledge,
        "professionnel",
        "Your profile as a wine professional implies a deep understanding of the market. \
         Your experience allows you to see wine as both an economic, sensory, and cultural \
         universe. This document aims to complement that expertise with a patrimonial \
         perspective.",
    ),
    Entry::new(
        Knowledge,
        "autre",
        "Your relationship with wine reflects a genuine interest in this world of passion \
         and heritage. Each approach to wine is unique — gustatory, cultural, or patrimonial.",
    ),
    Entry::new(
        Relation,
        "consommation",
        "Wine is above all a product of pleasure and conviviality. Enjoying it in a personal \
         or family setting is part of its cultural essence. Choosing, tasting, and storing \
         wine creates a living connection to heritage and tradition.",
    ),
    Entry::new(
        Relation,
        "investissement",
        "You seem to consider wine as an investment. It should be remembered, however, that \
         wine is not a financial product but a tangible good whose value depends on many \
         factors: vintage, storage, rarity, reputation of the estate, and market conditions. \
         The information provided here is general and should not be taken as investment \
         advice.",
    ),
    Entry::new(
        Relation,
        "les_deux",
        "You combine both pleasure and patrimonial perspective in your approach to wine. \
         This is a balanced vision, provided you keep in mind that wine remains first and \
         foremost a product of passion. Any financial consideration must be approached with \
         prudence, taking into account market fluctuations and storage conditions. The \
         information presented here does not constitute investment advice.",
    ),
    Entry::new(
        Relation,
        "autre",
        "Your connection to wine reflects a sincere and personal approach rooted in \
         discovery and pleasure. Each bottle represents a unique experience and a living \
         piece of heritage.",
    ),

    // ========================================================================
    // REGION PREFERENCE
    // ========================================================================
    Entry::new(
        RegionIntro,
        "stated",
        "You have expressed a preference for the following wine region: {region}.",
    ),
    Entry::new(
        RegionIntro,
        "autre",
        "You mentioned not having a specific preference for any wine region. This can be a \
         great opportunity to explore various options and receive personalized guidance \
         based on your tastes and goals.",
    ),
    Entry::new(
        Region,
        "bordeaux",
        "The Bordeaux region is a global benchmark, known for its classified growths and \
         balance between power and elegance. It’s ideal for understanding the notion of \
         terroir and wine longevity.\n\nAsk yourself: do you prefer Left Bank wines \
         (Cabernet Sauvignon, Médoc) or Right Bank (Merlot, Saint-Émilion)?\n\nNotable names \
         include Château Margaux, Lafite Rothschild, Pétrus, Cheval Blanc.",
    ),
    Entry::new(
        Region,
        "bourgogne",
        "Burgundy seduces with its refinement and complexity. It’s a region of growers where \
         every parcel tells a story. Exploring Burgundy means discovering the subtleties of \
         terroir through Pinot Noir and Chardonnay.\n\nAsk yourself: do you prefer \
         structured reds (Côte de Nuits) or prestigious whites (Côte de Beaune)?\n\nIcons \
         include Romanée-Conti, Meursault, Puligny-Montrachet, Chambertin.",
    ),
    Entry::new(
        Region,
        "vallee_du_rhone",
        "The Rhône Valley offers generous, sun-filled, and powerful wines. From the north \
         (Côte-Rôtie, Hermitage) to the south (Châteauneuf-du-Pape), diversity \
         abounds.\n\nAsk yourself: do you prefer Syrah’s character or the round, spicy \
         blends of Grenache and Mourvèdre?\n\nRenowned estates: E. Guigal, Chapoutier, \
         Château de Beaucastel.",
    ),
    Entry::new(
        Region,
        "loire",
        "The Loire embodies freshness and diversity: reds, whites, rosés, and sparkling \
         wines. It’s perfect for those who love bright, lively wines.\n\nAsk yourself: \
         Sauvignon (Sancerre, Pouilly-Fumé) or Chenin (Vouvray, Anjou)?\n\nRecommended \
         producers: Didier Dagueneau, Huet, Domaine des Roches Neuves.",
    ),
    Entry::new(
        Region,
        "champagne",
        "Champagne combines prestige and tradition. Behind the bubbles lies centuries of \
         craftsmanship.\n\nAsk yourself: do you prefer great houses (Dom Pérignon, \
         Bollinger) or grower champagnes (Jacques Selosse, Egly-Ouriet)?",
    ),
    Entry::new(
        Region,
        "alsace",
        "Alsace shines through its aromatic and precise wines — Riesling, Gewurztraminer, \
         Pinot Gris.\n\nAsk yourself: do you enjoy dry, crisp wines or richer, exotic \
         ones?\n\nKey estates: Trimbach, Zind-Humbrecht, Weinbach.",
    ),
    Entry::new(
        Region,
        "provence",
        "Provence evokes warmth and conviviality. Known for its rosés, it also produces \
         elegant reds and whites.\n\nAsk yourself: do you seek a summer wine or a \
         gastronomic one?\n\nTop names: Domaine Tempier, Château d’Esclans, Minuty, Ott.",
    ),
    Entry::new(
        Region,
        "italie",
        "Italy is a world of wine on its own, full of diversity and soul. From Piedmont \
         (Barolo, Barbaresco) to Tuscany (Brunello, Chianti, Super Tuscans), the range is \
         immense.\n\nAsk yourself: powerful and tannic, or floral and refined?\n\nFamous \
         producers: Gaja, Antinori, Sassicaia, Ornellaia.",
    ),
    Entry::new(
        Region,
        "espagne",
        "Spain blends tradition and innovation. From Rioja to Ribera del Duero, Tempranillo \
         expresses depth and elegance.\n\nAsk yourself: do you prefer classic, oaky wines or \
         modern, fruit-forward styles?\n\nKey producers: Vega Sicilia, Alvaro Palacios, La \
         Rioja Alta.",
    ),
    Entry::new(
        Region,
        "portugal",
        "Portugal’s charm lies in its authenticity. Beyond Port, great red wines from Douro \
         and Alentejo deserve attention.\n\nAsk yourself: fortified heritage or modern still \
         wines?\n\nRecommended estates: Niepoort, Quinta do Noval, Esporão.",
    ),
    Entry::new(
        Region,
        "nouveau_monde",
        "The New World represents modernity and creativity — from Chile and Argentina to \
         Australia and California.\n\nAsk yourself: do you prefer power or fruit \
         freshness?\n\nNotable producers: Penfolds, Catena Zapata, Opus One.",
    ),
    Entry::new(
        Region,
        "autre",
        "Every region has its hidden gems and stories.\n\nThere are many fascinating \
         possibilities depending on your tastes and goals.\n\nDo not hesitate to contact a \
         GrandcruX advisor for a personalized discussion.",
    ),

    // ========================================================================
    // BUDGET AND DIVERSIFICATION
    // ========================================================================
    Entry::new(
        Budget,
        "moins_500",
        "We note that you dedicate a yearly wine budget below EUR500. This suggests a \
         measured approach focused on enjoyment and simplicity.",
    ),
    Entry::new(
        Budget,
        "500_2000",
        "We note that you dedicate a yearly wine budget between EUR500 and EUR2,000. A \
         balanced level allowing you to explore interesting appellations while keeping \
         spending under control.",
    ),
    Entry::new(
        Budget,
        "2000_10000",
        "We note that you dedicate a yearly wine budget between EUR2,000 and EUR10,000. This \
         reflects a genuine enthusiasm and passion, combining pleasure, discovery, and \
         heritage value.",
    ),
    Entry::new(
        Budget,
        "plus_10000",
        "We note that you dedicate a yearly wine budget above EUR10,000. Such a commitment \
         reflects a deep passion or a collector’s mindset regarding fine wine.",
    ),
    Entry::new(
        BudgetGuidance,
        "text",
        "We invite you to a brief personal exercise: consider at what percentage or \
         frequency you find your satisfaction in wine. If your relationship with wine is \
         primarily about consumption, it may be interesting to sense your 'pleasure ratio' — \
         and, as your passion grows, adjust your budget accordingly.\n\nIf your focus leans \
         more toward investment, please note that we do not provide investment advice; \
         however, the general framework shown in the chart below may help you visualize a \
         balanced proportion. Wine can thus be seen as an alternative asset, much like art, \
         collectible cars, or fine watches.",
    ),
    Entry::new(InvestmentNotice, "text", "ATTENTION:  This does not constitute investment advice."),

    // ========================================================================
    // HERITAGE AND STORAGE
    // ========================================================================
    Entry::new(
        Possession,
        "cave_personnelle",
        "You own (or wish to own) a personal wine cellar — a choice that reflects \
         authenticity and passion. Ensure a stable temperature around 12 °C, humidity near \
         70%, and avoid direct light. A north or northeast orientation helps prevent \
         temperature fluctuations, while gentle ventilation ensures your wines age in \
         perfect harmony.",
    ),
    Entry::new(
        Possession,
        "cave_externalisee",
        "You rely on a professional or externalized wine storage service. A practical and \
         secure solution offering ideal storage conditions without the burden of \
         maintenance. Before choosing a provider, check for thermal stability, humidity \
         control, insurance coverage, and traceability systems. Some also offer digital \
         access to monitor your collection remotely.",
    ),
    Entry::new(
        Possession,
        "fonds_investissement",
        "You are interested in wine investment funds or platforms. Please note that \
         GrandcruX does not provide investment advice. However, we encourage you to research \
         carefully — look into fund governance, wine selection criteria, management fees, \
         and liquidity. Wine can be viewed as an alternative asset class, bridging tangible \
         heritage and sensory pleasure.",
    ),
    Entry::new(
        Possession,
        "pas_encore",
        "You do not yet own wine but wish to learn more. An excellent decision ! GrandcruX \
         advisors are available to guide you through the fundamentals of storage, the wine \
         market, and the selection of your first bottles.",
    ),
    Entry::new(MotivationIntro, "text", "We have noted that your main motivations are as follows:"),
    Entry::new(
        Motivation,
        "plaisir",
        "Pleasure.\n\nThis approach embodies the very essence of wine. Sharing a bottle, \
         discovering a vintage, enjoying a convivial moment — wine, above all, is meant to \
         be savoured. At GrandcruX, we believe that pleasure is the first true emotional \
         investment in wine.",
    ),
    Entry::new(
        Motivation,
        "transmission",
        "Family transmission.\n\nIt shows that you are asking the right questions. Passing \
         on a cellar means passing on a story, a memory, and a taste. To explore this topic \
         further, please refer to the second part of the report, dedicated to the \
         preservation and transmission of wine heritage.",
    ),
    Entry::new(
        Motivation,
        "placement",
        "Long-term investment.\n\nA thoughtful perspective. While we do not provide advice \
         on performance, wine can be considered an alternative long-term asset combining \
         rarity, pleasure, and emotional value. A delicate balance between passion and \
         heritage.",
    ),
    Entry::new(
        Motivation,
        "diversification",
        "Diversification.\n\nA wise approach. Wine can be seen as a complementary component \
         of a diversified portfolio, alongside collectible cars, art, or fine watches. A \
         refined blend of aesthetics, enjoyment, and tangible value.",
    ),

    // ========================================================================
    // RISK APPETITE
    // ========================================================================
    Entry::new(RiskIntro, "text", "We have noted the following risk appetite :"),
    Entry::new(
        Risk,
        "tres_faible",
        "Very low risk — you prioritise safety.\n\nIn this case, wine can be seen primarily \
         as a pleasure asset, whose main 'return' lies in enjoyment, heritage and tangible \
         value. There is virtually no risk, as wine remains a consumable and collectible \
         good. We remind you that GrandcruX does not provide investment advice; this \
         approach is above all one of prudence, stability and pleasure.",
    ),
    Entry::new(
        Risk,
        "modere",
        "Moderate risk — a balance between pleasure and return.\n\nThis balanced perspective \
         reflects an interest in both enjoyment and potential appreciation. It is possible \
         to achieve moderate returns on certain sought-after vintages, though always over \
         the long term and without any guarantees. We are not investment advisers and do not \
         issue financial recommendations. Wine remains an alternative asset class, where \
         passion and culture take precedence over performance.",
    ),
    Entry::new(
        Risk,
        "eleve",
        "High risk — a search for performance.\n\nSome specialised platforms offer high-risk \
         investments in fine wine, often linked to speculation on rare vintages or limited \
         productions. However, the pursuit of performance is not, to our knowledge, what \
         best characterises wine investment. GrandcruX does not provide investment advice \
         and does not promote a performance-driven approach. Wine should be viewed primarily \
         as an alternative, tangible and cultural asset.",
    ),

    // ========================================================================
    // TRANSMISSION AND LEGAL RESERVE
    // ========================================================================
    Entry::new(
        TransmissionIntro,
        "text",
        "First and foremost, inheritance and transfer of assets are governed by specific \
         legal rules. Wine, although associated with culture and passion, is legally \
         considered a movable asset. As such, it may be subject to inheritance taxation, \
         much like real estate.\n\nKeep in mind that in Belgium, inheritance tax is a \
         regional matter. Taxation rules differ between the Walloon Region, the Flemish \
         Region, and the Brussels-Capital Region.",
    ),
    Entry::new(
        Children,
        "oui",
        "We have noted that you have children.\n\nThe presence of children directly affects \
         inheritance rules. Belgian civil law provides a legal hereditary reserve for each \
         child — a portion of your total estate (the so-called 'fictitious estate mass') \
         that cannot be deprived from them. This mass includes all assets owned at death, \
         minus debts, and adds back any donations made during your lifetime.\n\nHalf of this \
         mass is freely disposable ('available share'), while the other half forms the \
         children's reserve, divided equally among them.\n\nThis ensures family protection \
         while maintaining flexibility in estate planning. We will later see how these \
         principles apply specifically to wine and cellar inheritance.",
    ),
    Entry::new(
        Children,
        "non",
        "We have noted that you do not have children.\n\nIn this situation, Belgian \
         succession law designates heirs according to the legal orders of kinship: your \
         parents, siblings, uncles, and aunts may inherit directly. However, without \
         descendants, inheritance taxes can be particularly high — especially for collateral \
         heirs.\n\nIt may therefore be wise to anticipate this to preserve the symbolic and \
         financial value of your wine collection. We will later explore how estate tools can \
         optimise this transmission.",
    ),
    Entry::new(
        ReserveIntro,
        "text",
        "Alongside taxation, Belgian law provides protective inheritance mechanisms.\n\nA \
         legal reserve exists for each child. In practice, this means that part of your \
         total estate (the 'fictitious mass', which includes all gifted and current assets) \
         is guaranteed to your heirs.\n\nHalf of the estate is freely disposable, and the \
         other half is reserved proportionally for your children.",
    ),
    Entry::new(ChildCount, "one", "You have {count} child."),
    Entry::new(ChildCount, "many", "You have {count} children."),
    Entry::new(
        ReserveFollowUp,
        "text",
        "Below is a simplified illustration of how this hereditary reserve is distributed \
         among your children. It represents the portion of your estate to which each child \
         is legally entitled.\n\nWe will see these rules further below in the specific case \
         of wine.",
    ),
    Entry::new(ChartLabel, "title", "Estate (or 'notional' estate)"),
    Entry::new(ChartLabel, "disposable", "Disposable portion"),
    Entry::new(ChartLabel, "child", "Reserve child {index}"),

    // ========================================================================
    // MATRIMONIAL REGIME
    // ========================================================================
    Entry::new(
        MatrimonialIntro,
        "text",
        "Before addressing inheritance, it is necessary to settle the matrimonial regime \
         when one exists. This determines what belongs to each spouse before any estate \
         division.\n\nWhen children are involved, inheritance usually combines usufruct (for \
         the surviving spouse) and bare ownership (for the children) — a structure that \
         offers both protection and tax efficiency. We will not delve into the legal \
         mechanisms.Please note that for the wine, a quasi-usufruct agreement (either under \
         private signature or through a notary) could be considered.",
    ),
    Entry::new(
        Unmarried,
        "text",
        "You are not married.\n\nThis means you are either single, in de facto cohabitation, \
         or in legal cohabitation.\n\n- In the case of de facto cohabitation, your partner \
         has no inheritance rights by default. If you wish for them to inherit your wine \
         cellar or the value of your wines, this must be explicitly provided for in a \
         will.\n\n- In legal cohabitation, you are considered under a separation of property \
         regime — each partner retains ownership of their own assets, including their \
         wines.\n\nIn both cases, careful estate planning helps preserve the symbolic and \
         financial value of your wine collection.",
    ),
    Entry::new(
        Regime,
        "communautelegale",
        "You are married under the legal community regime.\n\nAssets acquired before \
         marriage remain personal, while those acquired during marriage (including income) \
         are jointly owned.\n\nWines purchased before marriage remain your property, while \
         those acquired afterward belong to the community.\n\nThis regime provides balance \
         and mutual protection, and offers certain tax and inheritance benefits between \
         spouses.",
    ),
    Entry::new(
        Regime,
        "separationbien",
        "You are married under the separation of property regime.\n\nEach spouse maintains \
         their own estate — there is no shared community property.\n\nYour wines are \
         therefore part of your personal assets, unless otherwise stipulated (e.g., joint \
         purchase or donation).\n\nThis regime grants financial independence, but may \
         require additional arrangements to protect the surviving spouse.",
    ),
    Entry::new(
        Regime,
        "communauteuniverselle",
        "You are married under the universal community regime.\n\nAll assets — whether \
         acquired before or after marriage — are considered joint property, unless \
         exceptions are defined in the marriage contract.\n\nWines purchased at any time are \
         therefore part of the shared estate. In the event of death, the surviving spouse \
         retains a substantial portion of the assets, which enhances protection but reduces \
         the share available to heirs.\n\nThis regime is often chosen to ensure full \
         protection of the couple.",
    ),

    // ========================================================================
    // CORPORATE HOLDING
    // ========================================================================
    Entry::new(
        CompanyIntro,
        "text",
        "Beyond traditional family succession, certain assets — such as wine — can also be \
         held and transmitted through a company. This structure may open up opportunities \
         for optimisation or long-term planning.\n\nIf you own a company, your accountant \
         may advise you on mechanisms recognised under Belgian law such as dividend \
         distribution, liquidation reserves, or the VVPRbis regime. These can, in some \
         cases, support gradual or tax-efficient transmission.\n\nWe encourage you to \
         discuss these aspects with your trusted advisor to assess what may apply to your \
         situation.",
    ),
    Entry::new(
        Company,
        "type",
        "We note that you have indicated the following company type: {company}.",
    ),
    Entry::new(
        Company,
        "non",
        "You have indicated that you do not own a company. In this case, the transmission of \
         your wine assets will follow the general principles of personal inheritance law.",
    ),

    // ========================================================================
    // DONATION
    // ========================================================================
    Entry::new(
        DonationIntro,
        "text",
        "Would you like to make a gift — for Christmas, to your partner, or to your child? \
         It’s a wonderful idea ! Not only does it bring joy, but it can also have unexpected \
         tax advantages.\n\nAs mentioned earlier, unplanned inheritance can become a \
         financial burden. In Belgium, depending on family ties, inheritance taxes can reach \
         up to 70 % or more in certain cases. A way to anticipate this is through donation — \
         giving during one’s lifetime.",
    ),
    Entry::new(
        DonationTypes,
        "text",
        "There are two main types of donation:\n\n• Unregistered private donation, free of \
         charge (0 %), but subject to a 'survival' period of 3 to 5 years depending on the \
         region. If the donor passes away within this period, inheritance tax remains \
         due.\n\n• Registered donation, executed through a notary, subject to a modest \
         registration tax (around 3 %), after which it becomes fully exempt from inheritance \
         duties.\n\nThe right choice depends on the desired level of security and the nature \
         of the asset transferred.",
    ),
    Entry::new(
        DonationPact,
        "text",
        "Draw up an adjunct agreement to formalize the gift. This simple yet essential \
         document specifies the nature of the gift and may include certain conditions: • a \
         conventional return clause (if the donee passes away before the donor, the asset \
         returns to the original estate), • a financial compensation justified by a charge, \
         • or a temporary prohibition on selling the bottles for a set period. Also, take a \
         few particular precautions when drafting the document: for each bottle, specify its \
         vintage, estate, and, if necessary, an appraised value.",
    ),
    Entry::new(
        DonationTransition,
        "oui",
        "We have noted that you have already considered making donations in the past. Rest \
         assured — it’s not so different when it comes to wine. The same legal and practical \
         principles generally apply.",
    ),
    Entry::new(
        DonationTransition,
        "non",
        "We have noted that you have not yet considered making donations. Wine can be a \
         thoughtful and meaningful way to take the first step toward transmission.",
    ),
    Entry::new(
        DonationWine,
        "text",
        "Indeed, wine, as a tangible and patrimonial asset, can perfectly well be the \
         subject of a donation.\n\nHowever, certain precautions should be taken: have the \
         value of your wine cellar assessed by a recognized professional — ideally in the \
         presence of the donee — to avoid any future disputes.\n\nKeep in mind that the \
         value of fine wines may change over time. Thus, unlike a sum of money, a co-heir \
         may invoke the reduction of the gift upon the death of your parent if it infringes \
         on their reserved portion of the estate.\n\nIt is therefore advisable to keep these \
         considerations in mind when being assisted by your notary or a trusted advisor \
         during the transfer.",
    ),

    // ========================================================================
    // CONCLUSION AND ANNEX
    // ========================================================================
    Entry::new(
        Conclusion,
        "faible",
        "You indicated that you place limited importance on the cultural heritage \
         aspect.\n\nThat is perfectly understandable — wine can first and foremost be a \
         personal pleasure, a moment to enjoy and to share in the present. Yet even in that, \
         it carries memory and emotion. Each bottle tells a story — of a place, a gesture, a \
         savoir-faire — and that, too, is a form of heritage.\n\nMay you continue to enjoy \
         wine as an art of living, in your own way and at your own pace.",
    ),
    Entry::new(
        Conclusion,
        "moyenne",
        "You give moderate importance to the idea of cultural heritage.\n\nWine perfectly \
         embodies that balance — between pleasure and transmission, culture and sharing. You \
         don’t have to be a collector to appreciate its meaning. Wine connects people, \
         inspires emotion, and stands the test of time.\n\nAt GrandcruX, we believe every \
         cellar, however humble, can become a reflection of one’s own culture — of taste, of \
         memory, and of thoughtful transmission.",
    ),
    Entry::new(
        Conclusion,
        "elevee",
        "You attach great importance to cultural heritage.\n\nThat is perhaps the most \
         beautiful way to approach wine — not merely as a commodity, but as a living legacy. \
         To preserve, to share, to transmit — these gestures define the culture of wine and \
         extend the story of those who cherish it.\n\nAt GrandcruX, we fully share this \
         vision: wine is not only a passion, it is a bond between generations, a universal \
         language of time and terroir.",
    ),
    Entry::new(
        PresentationMention,
        "text",
        "We have noted your interest in receiving a presentation or additional material \
         about wine as a medium of transmission, or about its cultural aspects and best \
         practices.\n\nFeel free to discuss this with our advisors or to check our website \
         regularly for updates.",
    ),
    Entry::new(
        AnnexIntro,
        "text",
        "We have noted your comment and thank you for sharing it.\n\nPlease feel free to \
         contact us if you would like to discuss it further. If a written response is \
         required, you may bring this report to your appointment or to one of our \
         conferences, and we will reply directly in this section.",
    ),

    // ========================================================================
    // PRINT OPTIONS SHEET
    // ========================================================================
    Entry::new(PrintSheet, "title", "Our printed report options"),
    Entry::new(PrintSheet, "subtitle", "(Printing and delivery packages)"),
    Entry::new(
        PrintSheet,
        "footer",
        "If you are interested in one of these options, feel free to contact us.",
    ),
    Entry::new(PrintSheet, "team", "The GrandcruX Team"),
    Entry::new(PrintSheet, "contact", "info@grandcruX.com"),
    Entry::new(PrintOption, "handover", "Printed report handover at our office"),
    Entry::new(PrintPrice, "handover", "FREE"),
    Entry::new(PrintOption, "post", "Printed report sent by mail"),
    Entry::new(PrintPrice, "post", "25 EUR (+ possible shipping fees)"),
    Entry::new(PrintOption, "delivery", "Printed report and home delivery of the discovery pack"),
    Entry::new(PrintPrice, "delivery", "525 EUR (+ fees outside Brussels)"),
    Entry::new(PrintOption, "bespoke", "Custom-made package"),
    Entry::new(PrintPrice, "bespoke", "Price to be discussed (on request)"),

    // ========================================================================
    // DELIVERY MAIL
    // ========================================================================
    Entry::new(MailSubject, "text", "Your personalised wine report!"),
    Entry::new(
        MailBody,
        "text",
        r#"<p>Hello,</p>
<p>Please find attached your personalised wine report!</p>
<p>We would be delighted to meet you:</p>
<ul>
    <li>by registering for our conferences via
        <a href="https://www.grandcrux.com/conference/"
        style="color: blue; text-decoration: underline;">this link</a>;</li>
    <li>by scheduling an appointment directly with one of our advisors by writing to
        <a href="mailto:info@grandcrux.com?subject=Appointment%20with%20a%20GrandcruX%20advisor"
        style="color: blue; text-decoration: underline;">info@grandcrux.com</a>.</li>
</ul>
<p>For any other questions, feel free to contact us at
<a href="mailto:info@grandcrux.com" style="color: blue; text-decoration: underline;">info@grandcrux.com</a>.</p>
<p>We hope to see you again soon!</p>
<p>Kind regards,<br>The GrandcruX Team</p>"#,
    ),
];
